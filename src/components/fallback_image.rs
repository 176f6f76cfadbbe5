use yew::prelude::*;

use crate::image::ImageRef;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub image: ImageRef,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps to its placeholder on the first load error.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <ImageSlot
          image={props.image}
          failed={*failed}
          class={props.class.clone()}
          {onerror}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageSlotProps {
    pub image: ImageRef,
    pub failed: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onerror: Callback<Event>,
}

/// Stateless half of [`FallbackImage`]: the caller decides whether the
/// placeholder is shown.
#[function_component(ImageSlot)]
pub fn image_slot(props: &ImageSlotProps) -> Html {
    html! {
        <img
          src={props.image.resolve(props.failed)}
          alt={props.image.alt}
          class={props.class.clone()}
          onerror={props.onerror.clone()}
        />
    }
}
