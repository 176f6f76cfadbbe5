use yew::prelude::*;

use crate::components::LinkCard;
use crate::content::GalleryContent;

#[derive(Properties, PartialEq)]
pub struct GalleryPageProps {
    pub content: &'static GalleryContent,
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let c = props.content;
    html! {
        <section class="panel fade-in">
          <h2 class="page-title centered">{ c.heading }</h2>
          <div class="link-row">
            { for c.links.iter().map(|l| html! { <LinkCard link={*l} /> }) }
          </div>
        </section>
    }
}
