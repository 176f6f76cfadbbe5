mod about;
mod announcements;
mod contact;
mod gallery;
mod home;
mod programs;
mod support;

use yew::prelude::*;

use crate::content::ContentBlock;

use about::AboutPage;
use announcements::AnnouncementsPage;
use contact::ContactPage;
use gallery::GalleryPage;
use home::HomePage;
use programs::ProgramsPage;
use support::SupportPage;

pub fn render_block(block: ContentBlock) -> Html {
    match block {
        ContentBlock::Home(content) => html! { <HomePage {content} /> },
        ContentBlock::About(content) => html! { <AboutPage {content} /> },
        ContentBlock::Programs(content) => html! { <ProgramsPage {content} /> },
        ContentBlock::Gallery(content) => html! { <GalleryPage {content} /> },
        ContentBlock::Announcements(content) => html! { <AnnouncementsPage {content} /> },
        ContentBlock::Contact(content) => html! { <ContactPage {content} /> },
        ContentBlock::Support(content) => html! { <SupportPage {content} /> },
    }
}

fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="bullets">
          { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
        </ul>
    }
}
