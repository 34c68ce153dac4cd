use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config;

const SEARCHABLE: &str = "h1, h2, h3, p";
const HIGHLIGHT: [(&str, &str); 3] = [
    ("background", "yellow"),
    ("padding", "5px"),
    ("border-radius", "5px"),
];

/// Case-insensitive substring test used to pick highlighted elements.
pub fn text_matches(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

fn set_highlight(element: &HtmlElement, on: bool) {
    let style = element.style();
    for (property, value) in HIGHLIGHT {
        let result = if on {
            style.set_property(property, value)
        } else {
            style.remove_property(property).map(|_| ())
        };
        if result.is_err() {
            warn!("Could not update {} on highlighted element", property);
        }
    }
}

/// Highlights every heading and paragraph containing `term` for a few
/// seconds. Returns how many elements were marked.
pub fn highlight_matches(document: &Document, term: &str) -> usize {
    let nodes = match document.query_selector_all(SEARCHABLE) {
        Ok(nodes) => nodes,
        Err(_) => return 0,
    };

    let mut marked = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let text = element.text_content().unwrap_or_default();
        if !text_matches(&text, term) {
            continue;
        }

        set_highlight(&element, true);
        marked += 1;
        Timeout::new(config::HIGHLIGHT_MS, move || set_highlight(&element, false)).forget();
    }

    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert!(text_matches("Marketing Digital de Resultados", "digital"));
        assert!(text_matches("SEO e Conteúdo", "CONTEÚDO"));
    }

    #[test]
    fn unrelated_term_matches_nothing() {
        let texts = ["Nossos Serviços", "O que dizem nossos clientes", "Entre em Contato"];
        assert_eq!(texts.iter().filter(|t| text_matches(t, "blockchain")).count(), 0);
    }
}
