use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{debug, info};
use web_sys::MouseEvent;

mod config;
mod calculator;
mod counter;
mod navigation;
mod search;
mod theme;
mod validation;
mod watcher;
mod components {
    pub mod anchor_link;
    pub mod contact_form;
    pub mod discount_calculator;
    pub mod page_loader;
    pub mod search_button;
    pub mod stats_section;
    pub mod success_modal;
    pub mod theme_toggle;
}
mod pages {
    pub mod landing;
}

use components::{
    anchor_link::AnchorLink,
    page_loader::PageLoader,
    search_button::SearchButton,
    theme_toggle::ThemeToggle,
};
use navigation::{HeaderStyle, MenuState};
use pages::landing::Landing;

static NAV_LINKS: [(&str, &str); 5] = [
    ("#inicio", "Início"),
    ("#servicos", "Serviços"),
    ("#depoimentos", "Depoimentos"),
    ("#calculadora", "Calculadora"),
    ("#contato", "Contato"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MenuState::default);
    let header_style = use_state_eq(|| HeaderStyle::for_offset(navigation::current_scroll_y()));

    {
        let header_style = header_style.clone();
        use_event_with_window("scroll", move |_: Event| {
            header_style.set(HeaderStyle::for_offset(navigation::current_scroll_y()));
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MenuState::Closed);
        })
    };

    let active = menu.is_open().then(|| "active");

    html! {
        <header class="header" style={header_style.css()}>
            <nav class="navbar container">
                <AnchorLink href="#inicio" class={classes!("nav-logo")}>
                    <i class="fas fa-rocket"></i>{" MarketingPro"}
                </AnchorLink>

                <ul class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item">
                            <AnchorLink href={*href} class={classes!("nav-link")} onclick={close_menu.clone()}>
                                { *label }
                            </AnchorLink>
                        </li>
                    }) }
                </ul>

                <div class={classes!("menu-toggle", active)} id="mobile-menu" onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            info!("🚀 MarketingPro - Página carregada com sucesso!");
            info!("📊 Todas as funcionalidades JavaScript estão ativas.");
            || ()
        },
        (),
    );

    html! {
        <>
            <ThemeToggle />
            <Nav />
            <Landing />
            <SearchButton />
            <PageLoader />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    debug!("Starting application");
    yew::Renderer::<App>::new().render();
}
