/// Tuning for the scroll-reactive header. Hide is quick and reveal is slow on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderConfig {
    pub hide_threshold: f64,
    pub show_threshold: f64,
    pub sticky_threshold: f64,
    pub fallback_header_height: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            hide_threshold: 20.0,
            show_threshold: 100.0,
            sticky_threshold: 50.0,
            fallback_header_height: 80.0,
        }
    }
}

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const TYPING_SPEED_MS: u32 = 100;
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
pub const TILT_MEDIA_QUERY: &str = "(min-width: 1024px)";

/// Where the contact form posts to. `None` keeps the simulated transport.
#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    None // "http://localhost:3001/api/contact" when running a local backend
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    None
}
