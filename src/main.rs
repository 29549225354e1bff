use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod contact_form;
mod hooks;
mod motion {
    pub mod active_section;
    pub mod navigator;
    pub mod reveal;
    pub mod scope;
    pub mod section;
    pub mod ticker;
    pub mod visibility;
}
mod dom {
    pub mod observer;
    pub mod scroll;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod experience;
    pub mod hero;
    pub mod icon;
    pub mod projects;
    pub mod section_header;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use components::icon::{Icon, IconKind};
use dom::scroll::navigate;
use motion::section::SectionId;
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let active = use_context::<SectionId>().unwrap_or_default();
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let go_to = |target: SectionId| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate(target.as_str());
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-items mobile-menu-open"
    } else {
        "nav-items"
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                    }
                    .nav-pill {
                        display: flex;
                        align-items: center;
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(24px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .nav-items { display: flex; gap: 2rem; }
                    .nav-item {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 999px;
                        background: none;
                        color: #9ca3af;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .nav-item:hover { color: white; background: rgba(255, 255, 255, 0.1); }
                    .nav-item.active { color: white; background: rgba(255, 255, 255, 0.2); }
                    .nav-label { display: none; }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: white;
                        cursor: pointer;
                    }
                    @media (max-width: 640px) {
                        .burger-menu { display: flex; }
                        .nav-items { display: none; }
                        .nav-items.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            gap: 0.5rem;
                            position: absolute;
                            top: calc(100% + 0.75rem);
                            left: 50%;
                            transform: translateX(-50%);
                            padding: 1rem;
                            border-radius: 1rem;
                            background: rgba(11, 15, 25, 0.95);
                            border: 1px solid rgba(255, 255, 255, 0.2);
                        }
                        .mobile-menu-open .nav-label { display: inline; }
                    }
                "#}
            </style>
            <div class="nav-pill">
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <Icon kind={if *menu_open { IconKind::X } else { IconKind::Menu }} />
                </button>
                <div class={menu_class}>
                    { for SectionId::ALL.iter().map(|id| html! {
                        <button
                            key={id.as_str()}
                            class={classes!("nav-item", (active == *id).then(|| "active"))}
                            onclick={go_to(*id)}
                            title={id.label()}
                        >
                            <Icon kind={id.icon()} size={18} />
                            <span class="nav-label">{id.label()}</span>
                        </button>
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::warn!("console logger already initialized");
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
