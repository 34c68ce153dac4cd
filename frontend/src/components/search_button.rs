use log::debug;
use stylist::css;
use yew::prelude::*;

use crate::search;

const PROMPT: &str = "O que você está procurando?";

#[function_component(SearchButton)]
pub fn search_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let term = match window.prompt_with_message(PROMPT) {
            Ok(Some(term)) if !term.is_empty() => term,
            _ => return,
        };
        if let Some(document) = window.document() {
            let marked = search::highlight_matches(&document, &term);
            debug!("Search \"{}\": {} match(es)", term, marked);
        }
    });

    let class = css!(
        r#"
        position: fixed;
        bottom: 80px;
        right: 20px;
        width: 50px;
        height: 50px;
        border-radius: 50%;
        background: var(--secondary-color);
        color: white;
        border: none;
        cursor: pointer;
        box-shadow: var(--shadow-lg);
        z-index: 1000;
        transition: all 0.3s ease;
    "#
    );

    html! {
        <button class={classes!("search-toggle", class)} {onclick} aria-label="Buscar na página">
            <i class="fas fa-search"></i>
        </button>
    }
}
