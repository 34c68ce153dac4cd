//! Linear count-up used by the statistics section.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatItem {
    pub target: u32,
    pub current: u32,
}

impl StatItem {
    pub fn new(target: u32) -> Self {
        Self { target, current: 0 }
    }

    pub fn advance(&mut self, progress: f64) {
        self.current = value_at(progress, self.target);
    }
}

pub fn value_at(progress: f64, target: u32) -> u32 {
    (progress.clamp(0.0, 1.0) * f64::from(target)).floor() as u32
}

/// Progress clock anchored at the first frame timestamp it sees.
#[derive(Clone, Copy, Debug)]
pub struct CounterClock {
    start: Option<f64>,
    duration_ms: f64,
}

impl CounterClock {
    pub fn new(duration_ms: f64) -> Self {
        Self { start: None, duration_ms }
    }

    pub fn progress(&mut self, timestamp: f64) -> f64 {
        let start = *self.start.get_or_insert(timestamp);
        ((timestamp - start) / self.duration_ms).min(1.0)
    }
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
    let requested = web_sys::window()
        .map(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()));
    if !matches!(requested, Some(Ok(_))) {
        warn!("requestAnimationFrame unavailable, counter stopped");
    }
}

/// Runs the count-up on animation frames, handing every frame's values to
/// `on_frame`. Stops after the frame that reaches full progress.
pub fn animate<F>(targets: Vec<u32>, duration_ms: f64, on_frame: F)
where
    F: Fn(Vec<StatItem>) + 'static,
{
    let mut clock = CounterClock::new(duration_ms);
    let mut items: Vec<StatItem> = targets.into_iter().map(StatItem::new).collect();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let progress = clock.progress(timestamp);
        for item in items.iter_mut() {
            item.advance(progress);
        }
        on_frame(items.clone());

        if progress < 1.0 {
            if let Some(callback) = frame.borrow().as_ref() {
                request_frame(callback);
            }
        } else {
            // Drop our own closure so it is freed once this frame returns.
            let _ = frame.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let first_frame = handle.borrow();
    if let Some(callback) = first_frame.as_ref() {
        request_frame(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_linear_and_floored() {
        assert_eq!(value_at(0.0, 150), 0);
        assert_eq!(value_at(0.5, 5), 2);
        assert_eq!(value_at(0.999, 98), 97);
        assert_eq!(value_at(1.0, 300), 300);
        assert_eq!(value_at(1.5, 300), 300);
    }

    #[test]
    fn clock_starts_at_first_frame() {
        let mut clock = CounterClock::new(2000.0);
        assert_eq!(clock.progress(5_000.0), 0.0);
        assert_eq!(clock.progress(6_000.0), 0.5);
        assert_eq!(clock.progress(9_000.0), 1.0);
    }

    #[test]
    fn stat_item_finishes_on_target() {
        let mut item = StatItem::new(98);
        item.advance(0.25);
        assert_eq!(item.current, 24);
        item.advance(1.0);
        assert_eq!(item.current, item.target);
    }
}
