use gloo::console::{debug, info};
use yew::prelude::*;

use solip_center::components::{Footer, Header};
use solip_center::page::Page;
use solip_center::pages;
use solip_center::router::{Router, RouterAction};
use solip_center::site;

#[function_component(App)]
fn app() -> Html {
    let router = use_reducer(Router::new);

    let on_navigate = {
        let router = router.clone();
        Callback::from(move |page: Page| {
            debug!(format!("navigate: {} -> {}", router.current(), page));
            router.dispatch(RouterAction::Navigate(page));
        })
    };

    html! {
        <div class="app">
          <Header router={*router} {on_navigate} />
          <main class="container content">
            { pages::render_block(router.current_block()) }
          </main>
          <Footer />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    info!(format!("{} site starting", site::NAME));
    yew::Renderer::<App>::new().render();
}
