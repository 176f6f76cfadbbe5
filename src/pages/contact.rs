use yew::prelude::*;

use crate::components::icon;
use crate::content::{ContactContent, HoursEntry, Icon};

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub content: &'static ContactContent,
}

#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let c = props.content;
    let map_style = format!("height: {}px;", c.map_height_px);

    html! {
        <section class="panel fade-in">
          <h2 class="page-title">{ c.heading }</h2>

          <div class="grid-2 block">
            <div>
              <h3 class="section-title">{ c.details_title }</h3>
              <ul class="details">
                <li>
                  { icon(Icon::Home, "icon-sm") }
                  <span>{ format!("주소: {}", c.address) }<br />{ c.postal_line }</span>
                </li>
                <li>
                  { icon(Icon::Mail, "icon-sm") }
                  <span>{ format!("이메일: {}", c.email) }</span>
                </li>
                <li>
                  { icon(Icon::Info, "icon-sm") }
                  <span>{ format!("전화: {}", c.phone) }</span>
                </li>
                <li>
                  { icon(Icon::BookOpen, "icon-sm") }
                  <span>{ format!("팩스: {}", c.fax) }</span>
                </li>
              </ul>
            </div>

            <div>
              <h3 class="section-title">{ c.hours_title }</h3>
              <ul class="hours">
                { for c.hours.iter().map(hours_entry) }
              </ul>
            </div>
          </div>

          <div>
            <h3 class="section-title">{ c.directions_title }</h3>
            <p class="block">
              { format!("{}에 위치하고 있습니다. 대중교통 이용 시, 지하철 1호선 ", c.address) }
              <span class="strong-blue">{ c.transit_station }</span>
              { "로 나와서 " }
              <span class="strong-blue">{ c.transit_landmark }</span>
              { "으로 오시면 됩니다." }
            </p>
            <div class="map-frame" style={map_style}>
              <iframe
                src={c.map_src}
                title={c.map_title}
                allowfullscreen=true
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
              ></iframe>
            </div>
            <p class="muted small centered">{ c.map_note }</p>
          </div>
        </section>
    }
}

fn hours_entry(h: &HoursEntry) -> Html {
    match h.detail {
        [only] => html! { <li>{ format!("{}: {}", h.days, only) }</li> },
        many => html! {
            <>
              <li>{ format!("{}:", h.days) }</li>
              <ul class="bullets nested">
                { for many.iter().map(|d| html! { <li>{ *d }</li> }) }
              </ul>
            </>
        },
    }
}
