use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_THEME_CLASS: &str = "dark-theme";

// Header switches to the solid look past this many pixels of scroll
pub const HEADER_SOLID_THRESHOLD: f64 = 100.0;
pub const PARALLAX_SPEED: f64 = 0.5;

pub const ENTRANCE_THRESHOLD: f64 = 0.1;
pub const ENTRANCE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STATS_THRESHOLD: f64 = 0.5;

pub const ERROR_CLEAR_MS: u32 = 3_000;
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const RESULT_REVEAL_DELAY_MS: u32 = 100;
pub const LOADER_HOLD_MS: u32 = 1_000;
pub const LOADER_FADE_MS: u32 = 500;
pub const HIGHLIGHT_MS: u32 = 3_000;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;

pub const MIN_BUDGET: f64 = 1_000.0;
pub const DISCOUNT_PERCENT: f64 = 15.0;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_lines_only_reach_the_console_in_dev_builds() {
        assert_eq!(log_level() >= Level::Debug, cfg!(debug_assertions));
        assert!(log_level() >= Level::Info);
    }
}
