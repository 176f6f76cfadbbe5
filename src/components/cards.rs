use yew::prelude::*;

use super::{icon, FallbackImage};
use crate::content::{Feature, Icon, LinkBox, StaffMember};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let f = props.feature;
    html! {
        <div class="card feature-card">
          <div class="feature-icon">{ icon(f.icon, "icon-lg") }</div>
          <h3 class="card-title">{ f.title }</h3>
          <p class="muted">{ f.description }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaffCardProps {
    pub member: StaffMember,
}

#[function_component(StaffCard)]
pub fn staff_card(props: &StaffCardProps) -> Html {
    let m = props.member;
    html! {
        <div class="card staff-card">
          <FallbackImage image={m.photo} class="staff-photo" />
          <div>
            <h4 class="card-title">{ m.name }</h4>
            <p class="staff-role">{ m.role }</p>
            <p class="muted small">{ m.description }</p>
          </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkCardProps {
    pub link: LinkBox,
}

#[function_component(LinkCard)]
pub fn link_card(props: &LinkCardProps) -> Html {
    let l = props.link;
    html! {
        <a
          class={classes!("card", "link-card", l.accent.class())}
          href={l.href}
          target="_blank"
          rel="noopener noreferrer"
        >
          <div class="feature-icon">{ icon(l.icon, "icon-xl") }</div>
          <h3 class="card-title">{ l.title }</h3>
          <p>{ l.description }</p>
          <div class="cta-row">
            <span class="cta">{ "바로가기 " }{ icon(Icon::ExternalLink, "icon-sm") }</span>
          </div>
        </a>
    }
}
