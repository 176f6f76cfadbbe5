use yew::prelude::*;

use crate::components::{icon, FallbackImage};
use crate::content::{ProgramArea, ProgramsContent};

#[derive(Properties, PartialEq)]
pub struct ProgramsPageProps {
    pub content: &'static ProgramsContent,
}

#[function_component(ProgramsPage)]
pub fn programs_page(props: &ProgramsPageProps) -> Html {
    let c = props.content;
    html! {
        <section class="panel fade-in">
          <h2 class="page-title">{ c.heading }</h2>
          <p class="block">{ c.intro }</p>
          { for c.areas.iter().map(area) }
        </section>
    }
}

fn area(a: &ProgramArea) -> Html {
    html! {
        <div class={classes!("program", a.accent.class())}>
          <h3 class="program-title">
            { icon(a.icon, "icon-md") }
            <span>{ format!("{}. {}", a.number, a.title) }</span>
          </h3>
          <p>{ a.summary }</p>
          <ul class="bullets">
            { for a.items.iter().map(|item| html! {
                <li><strong>{ format!("{}:", item.label) }</strong>{ format!(" {}", item.text) }</li>
            }) }
          </ul>
          <FallbackImage image={a.photo} class="banner program-photo" />
        </div>
    }
}
