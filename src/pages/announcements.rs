use yew::prelude::*;

use crate::components::LinkCard;
use crate::content::AnnouncementsContent;

#[derive(Properties, PartialEq)]
pub struct AnnouncementsPageProps {
    pub content: &'static AnnouncementsContent,
}

#[function_component(AnnouncementsPage)]
pub fn announcements_page(props: &AnnouncementsPageProps) -> Html {
    let c = props.content;
    html! {
        <section class="panel fade-in">
          <h2 class="page-title centered">{ c.heading }</h2>
          <div class="link-row spaced">
            <LinkCard link={c.link} />
          </div>
        </section>
    }
}
