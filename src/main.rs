use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod eco_fact;
mod components {
    pub mod eco_fact_widget;
    pub mod product_card;
}
mod pages {
    pub mod home;
}

use content::{nav_href, BRAND, NAV_LINKS};
use pages::home::Home;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(Ok(scroll_y)) = web_sys::window().map(|w| w.scroll_y()) {
                        is_scrolled.set(scroll_y > 80.0);
                    }
                });
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not attach scroll listener");
                }
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            destructor
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links keep their default action so the anchor still scrolls.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={close_menu.clone()}>{BRAND}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(label, id)| html! {
                        <a href={nav_href(id)} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #ffffff;
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #2563eb;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    font-size: 1.1rem;
                    font-weight: 500;
                    color: #1f2937;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #2563eb;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 3px;
                    background: #1f2937;
                    border-radius: 2px;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem 1.5rem;
                        background: #ffffff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting {} site", BRAND);
    yew::Renderer::<App>::new().render();
}
