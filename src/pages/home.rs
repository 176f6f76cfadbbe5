use yew::prelude::*;

use crate::components::{FallbackImage, FeatureCard};
use crate::content::HomeContent;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub content: &'static HomeContent,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let c = props.content;
    html! {
        <section class="panel hero fade-in">
          <h2 class="hero-title">{ c.heading }</h2>
          <p class="lead">{ c.intro }</p>
          <FallbackImage image={c.hero} class="banner" />

          <div class="grid-3">
            { for c.features.iter().map(|f| html! { <FeatureCard feature={*f} /> }) }
          </div>

          <div class="card vision">
            <h3 class="section-title">{ c.vision_title }</h3>
            <p>{ c.vision }</p>
          </div>
        </section>
    }
}
