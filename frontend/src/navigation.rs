use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderStyle {
    #[default]
    Transparent,
    Solid,
}

impl HeaderStyle {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > config::HEADER_SOLID_THRESHOLD {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            HeaderStyle::Solid => "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);",
            HeaderStyle::Transparent => "background: rgba(255, 255, 255, 0.95); box-shadow: none;",
        }
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * config::PARALLAX_SPEED)
}

/// Scroll position that puts a section's top just under the fixed header.
pub fn anchor_scroll_top(target_offset_top: i32, header_height: i32) -> f64 {
    f64::from(target_offset_top - header_height)
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scrolls to the element named by an in-page `href` such as
/// `#contato`. Returns false when there is nothing to scroll to.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };

    // A bare "#" is not a valid selector and lands here as Err.
    let target = match document.query_selector(href) {
        Ok(Some(el)) => el,
        _ => {
            debug!("No anchor target for {}", href);
            return false;
        }
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return false;
    };

    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
        .map(|h| h.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(target.offset_top(), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_flips_and_close_is_idempotent() {
        let open = MenuState::Closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.toggled(), MenuState::Closed);
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn header_turns_solid_strictly_past_threshold() {
        assert_eq!(HeaderStyle::for_offset(0.0), HeaderStyle::Transparent);
        assert_eq!(HeaderStyle::for_offset(100.0), HeaderStyle::Transparent);
        assert_eq!(HeaderStyle::for_offset(100.5), HeaderStyle::Solid);
        assert!(HeaderStyle::Transparent.css().contains("box-shadow: none"));
        assert!(HeaderStyle::Solid.css().contains("0.98"));
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(200.0), "translateY(100px)");
        assert_eq!(parallax_transform(101.0), "translateY(50.5px)");
    }

    #[test]
    fn anchor_offset_subtracts_header() {
        assert_eq!(anchor_scroll_top(1200, 80), 1120.0);
        assert_eq!(anchor_scroll_top(40, 80), -40.0);
    }
}
