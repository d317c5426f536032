use yew::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod lead;
mod reading;
mod session;
mod api {
    pub mod client;
    pub mod models;
}
mod components {
    pub mod guidance_widget;
    pub mod lead_gate;
    pub mod palm_widget;
    pub mod service_status;
    pub mod testimonials;
    pub mod usage_counter;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod landing;
}

use content::NAV_SECTIONS;
use pages::landing::Landing;

/// Smooth-scroll to the section with the given anchor id, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();

            let scroll_window = window.clone();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = scroll_window
                    .as_ref()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_y > config::SCROLL_THRESHOLD_PX);
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window.as_ref() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <span class="logo-icon">{"✦"}</span>
                    <span class="logo-text">
                        <span class="logo-title">{"Dia Astro"}</span>
                        <span class="logo-tagline">{"VEDIC WISDOM"}</span>
                    </span>
                </a>

                <nav class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                            menu_open.set(false);
                        });
                        html! { <button class="nav-link" {onclick}>{label}</button> }
                    }) }
                </nav>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    padding: 1.2rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(11, 4, 32, 0.95);
                    padding: 0.7rem 2rem;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.7rem;
                    text-decoration: none;
                }

                .logo-icon {
                    font-size: 2rem;
                    color: #FFD700;
                }

                .logo-text {
                    display: flex;
                    flex-direction: column;
                }

                .logo-title {
                    font-family: 'Cinzel', serif;
                    font-size: 1.5rem;
                    color: #FFD700;
                }

                .logo-tagline {
                    font-size: 0.65rem;
                    letter-spacing: 3px;
                    color: #C9C9C9;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #F5F5F5;
                    font-family: inherit;
                    font-size: 0.95rem;
                    cursor: pointer;
                }

                .nav-link:hover {
                    color: #FFD700;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #FFD700;
                    font-size: 1.6rem;
                    cursor: pointer;
                }

                @media (max-width: 900px) {
                    .burger-menu {
                        display: block;
                    }

                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: rgba(11, 4, 32, 0.98);
                        padding: 1.5rem 2rem;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Dia Astro, backend at {}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
