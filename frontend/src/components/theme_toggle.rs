use log::debug;
use stylist::css;
use yew::prelude::*;

use crate::theme::{self, LocalStorage};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    // Applied inside the initializer so a stored dark theme is on <body>
    // before the first paint.
    let current = use_state(|| {
        let stored = theme::load(&LocalStorage);
        theme::apply_to_body(stored);
        stored
    });

    let onclick = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::toggle(&LocalStorage, *current);
            theme::apply_to_body(next);
            debug!("Theme switched to {}", next.as_str());
            current.set(next);
        })
    };

    let class = css!(
        r#"
        position: fixed;
        bottom: 20px;
        right: 20px;
        width: 50px;
        height: 50px;
        border-radius: 50%;
        background: var(--primary-color);
        color: white;
        border: none;
        cursor: pointer;
        box-shadow: var(--shadow-lg);
        z-index: 1000;
        transition: all 0.3s ease;
    "#
    );

    html! {
        <button class={classes!("theme-toggle", class)} {onclick} aria-label="Alternar tema">
            <i class={current.icon_class()}></i>
        </button>
    }
}

