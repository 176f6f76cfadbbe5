use yew::prelude::*;

use super::icon;
use crate::content::Icon;
use crate::page::{Page, MENU};
use crate::router::Router;
use crate::site;

fn menu_icon(page: Page) -> Icon {
    match page {
        Page::Home => Icon::Home,
        Page::About => Icon::Info,
        Page::Programs => Icon::BookOpen,
        Page::Gallery => Icon::Image,
        Page::Announcements => Icon::Bell,
        Page::Contact => Icon::Mail,
        Page::Support => Icon::HeartHandshake,
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub router: Router,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let go_home = props.on_navigate.reform(|_: MouseEvent| Page::Home);

    html! {
        <header class="site-header">
          <div class="container header-row">
            <div class="brand" onclick={go_home}>
              <img class="logo" src={site::LOGO_SRC} alt={site::LOGO_ALT} />
              <h1 class="brand-title">
                <span class="brand-accent">{ site::NAME_ACCENT }</span>
                <span>{ site::NAME_REST }</span>
              </h1>
            </div>

            <nav aria-label="주 메뉴">
              <ul class="menu">
                { for MENU.iter().map(|page| html! {
                    <li>
                      <NavItem
                        page={*page}
                        active={props.router.is_active(*page)}
                        on_navigate={props.on_navigate.clone()}
                      />
                    </li>
                }) }
              </ul>
            </nav>
          </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    page: Page,
    active: bool,
    on_navigate: Callback<Page>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let page = props.page;
    let onclick = props.on_navigate.reform(move |_: MouseEvent| page);

    html! {
        <button
          class={classes!("nav-item", props.active.then_some("active"))}
          aria-current={props.active.then_some("page")}
          {onclick}
        >
          { icon(menu_icon(page), "nav-icon") }
          <span class="nav-label">{ page.menu_label().unwrap_or_default() }</span>
        </button>
    }
}
