use yew::prelude::*;

use super::bullet_list;
use crate::components::FallbackImage;
use crate::content::SupportContent;

#[derive(Properties, PartialEq)]
pub struct SupportPageProps {
    pub content: &'static SupportContent,
}

#[function_component(SupportPage)]
pub fn support_page(props: &SupportPageProps) -> Html {
    let c = props.content;
    let account = c.account;

    html! {
        <section class="panel fade-in">
          <h2 class="page-title">{ c.heading }</h2>
          <p class="block">{ c.intro }</p>

          <a href={c.photo_link} target="_blank" rel="noopener noreferrer">
            <FallbackImage image={c.photo} class="banner hover-dim" />
          </a>

          <div class="grid-2">
            <div>
              <h3 class="section-title">{ c.donation_title }</h3>
              <p>{ c.donation_intro }</p>
              { bullet_list(c.donation_kinds) }
              <div class="note-box accent-blue">
                <p class="note-title">{ c.account_title }</p>
                <p class="strong">{ format!("은행: {}", account.bank) }</p>
                <p class="strong">{ format!("계좌번호: {}", account.number) }</p>
                <p class="strong">{ format!("예금주: {}", account.holder) }</p>
              </div>
              <p class="muted small">{ c.donation_note }</p>
            </div>

            <div>
              <h3 class="section-title">{ c.volunteer_title }</h3>
              <p>{ c.volunteer_intro }</p>
              { bullet_list(c.volunteer_kinds) }
              <div class="note-box accent-amber">
                <p class="note-title">{ c.apply_title }</p>
                <p>{ c.apply_how }</p>
                <p>{ c.apply_contact }</p>
              </div>
              <p class="muted small">{ c.volunteer_note }</p>
            </div>
          </div>

          <div class="card closing">
            <h3 class="section-title">{ c.closing_title }</h3>
            <p>{ c.closing }</p>
          </div>
        </section>
    }
}
