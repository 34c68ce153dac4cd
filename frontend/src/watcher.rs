//! Visibility watching on top of `IntersectionObserver`.
//!
//! A watcher either keeps watching its targets for the page lifetime or
//! detaches from each target after the first time it becomes visible.
//! Dropping the watcher disconnects the observer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchMode {
    /// Notify on every entry into view; never unobserve.
    Perpetual,
    /// Notify once per target, then unobserve it.
    Once,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub mode: WatchMode,
}

pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn new<F>(options: WatchOptions, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let mode = options.mode;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if mode == WatchMode::Once {
                    observer.unobserve(&target);
                }
                on_enter(target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
