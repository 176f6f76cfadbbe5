use yew::prelude::*;

use super::bullet_list;
use crate::components::{FallbackImage, StaffCard};
use crate::content::AboutContent;

#[derive(Properties, PartialEq)]
pub struct AboutPageProps {
    pub content: &'static AboutContent,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let c = props.content;
    html! {
        <section class="panel fade-in">
          <h2 class="page-title">{ c.heading }</h2>

          <div class="block">
            <h3 class="section-title">{ c.overview_title }</h3>
            <p>{ c.overview }</p>
          </div>

          <FallbackImage image={c.photo} class="banner" />

          <div class="block">
            <h3 class="section-title">{ c.purposes_title }</h3>
            { bullet_list(c.purposes) }
          </div>

          <div class="block">
            <h3 class="section-title">{ c.history_title }</h3>
            { bullet_list(c.history) }
          </div>

          <div>
            <h3 class="section-title">{ c.staff_title }</h3>
            <div class="grid-3 staff-grid">
              { for c.staff.iter().map(|m| html! { <StaffCard member={*m} /> }) }
            </div>
          </div>
        </section>
    }
}
