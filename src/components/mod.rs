mod cards;
mod fallback_image;
mod footer;
mod header;

pub use cards::{FeatureCard, LinkCard, StaffCard};
pub use fallback_image::{FallbackImage, FallbackImageProps, ImageSlot, ImageSlotProps};
pub use footer::Footer;
pub use header::Header;

use yew::prelude::*;

use crate::content::Icon;

pub fn icon(icon: Icon, class: &'static str) -> Html {
    html! { <span class={classes!("icon", class)} aria-hidden="true">{ icon.glyph() }</span> }
}
