use yew::prelude::*;

use crate::site;

#[function_component(Footer)]
pub fn footer() -> Html {
    let [identity, registration, copyright] = site::footer_lines();

    html! {
        <footer class="site-footer">
          <div class="container">
            <p>{ identity }</p>
            <p>{ registration }</p>
            <p class="copyright">{ copyright }</p>
          </div>
        </footer>
    }
}
