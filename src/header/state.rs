use crate::config::HeaderConfig;

/// Scroll-derived header flags. The menu lives in [`super::menu::MenuState`]
/// since scrolling never touches it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderState {
    pub last_scroll_y: f64,
    pub scroll_delta: f64,
    pub hidden: bool,
    pub sticky: bool,
}

/// Flags after one evaluation, so the caller only touches the DOM on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub hidden: bool,
    pub sticky: bool,
}

impl HeaderState {
    pub fn flags(&self) -> HeaderFlags {
        HeaderFlags {
            hidden: self.hidden,
            sticky: self.sticky,
        }
    }

    pub fn on_scroll(&mut self, current_scroll_y: f64, config: &HeaderConfig) -> HeaderFlags {
        self.scroll_delta += current_scroll_y - self.last_scroll_y;

        if self.scroll_delta > config.hide_threshold {
            self.hidden = true;
            self.scroll_delta = 0.0;
        } else if self.scroll_delta < -config.show_threshold {
            self.hidden = false;
            self.scroll_delta = 0.0;
        }

        // top of page wins over anything accumulated above
        if current_scroll_y <= 0.0 {
            self.hidden = false;
            self.scroll_delta = 0.0;
        }

        self.sticky = current_scroll_y > config.sticky_threshold;
        self.last_scroll_y = current_scroll_y;
        self.flags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(positions: &[f64]) -> HeaderState {
        let config = HeaderConfig::default();
        let mut state = HeaderState::default();
        for &y in positions {
            state.on_scroll(y, &config);
        }
        state
    }

    #[test]
    fn hides_once_downward_movement_passes_twenty() {
        let config = HeaderConfig::default();
        let mut state = HeaderState::default();
        state.on_scroll(0.0, &config);
        state.on_scroll(10.0, &config);
        assert!(!state.hidden);
        assert_eq!(state.scroll_delta, 10.0);

        state.on_scroll(35.0, &config);
        assert!(state.hidden);
        assert_eq!(state.scroll_delta, 0.0);
    }

    #[test]
    fn exactly_twenty_is_not_enough() {
        let state = run(&[20.0]);
        assert!(!state.hidden);
        assert_eq!(state.scroll_delta, 20.0);
    }

    #[test]
    fn small_upward_scroll_keeps_header_hidden() {
        let state = run(&[400.0, 350.0]);
        assert!(state.hidden);
        assert_eq!(state.scroll_delta, -50.0);
    }

    #[test]
    fn reveals_after_sustained_upward_scroll() {
        let state = run(&[400.0, 340.0, 290.0]);
        assert!(!state.hidden);
        assert_eq!(state.scroll_delta, 0.0);
    }

    #[test]
    fn top_of_page_forces_visible() {
        let state = run(&[30.0, 0.0]);
        assert!(!state.hidden);
        assert_eq!(state.scroll_delta, 0.0);
        assert!(!state.sticky);
    }

    #[test]
    fn leaving_sticky_at_the_top_resets_delta() {
        let mut state = HeaderState::default();
        let config = HeaderConfig::default();
        assert!(state.on_scroll(200.0, &config).sticky);
        state.on_scroll(190.0, &config);
        assert_eq!(state.scroll_delta, -10.0);

        let flags = state.on_scroll(0.0, &config);
        assert!(!flags.sticky);
        assert!(!flags.hidden);
        assert_eq!(state.scroll_delta, 0.0);
    }

    #[test]
    fn negative_overscroll_counts_as_top() {
        let state = run(&[200.0, -12.0]);
        assert!(!state.hidden);
        assert_eq!(state.scroll_delta, 0.0);
        assert_eq!(state.last_scroll_y, -12.0);
    }

    #[test]
    fn sticky_and_hidden_can_both_hold() {
        let state = run(&[51.0]);
        assert!(state.sticky);
        assert!(state.hidden);

        let state = run(&[50.0]);
        assert!(!state.sticky);
    }

    proptest! {
        #[test]
        fn sticky_tracks_position_only(positions in prop::collection::vec(0.0f64..5000.0, 1..40)) {
            let config = HeaderConfig::default();
            let mut state = HeaderState::default();
            for &y in &positions {
                let flags = state.on_scroll(y, &config);
                prop_assert_eq!(flags.sticky, y > config.sticky_threshold);
            }
        }

        #[test]
        fn visibility_flips_only_past_thresholds(positions in prop::collection::vec(0.0f64..5000.0, 1..40)) {
            let config = HeaderConfig::default();
            let mut state = HeaderState::default();
            for &y in &positions {
                let before = state.clone();
                let pending = before.scroll_delta + (y - before.last_scroll_y);
                state.on_scroll(y, &config);

                if y <= 0.0 {
                    prop_assert!(!state.hidden);
                } else if pending > config.hide_threshold {
                    prop_assert!(state.hidden);
                } else if pending < -config.show_threshold {
                    prop_assert!(!state.hidden);
                } else {
                    prop_assert_eq!(state.hidden, before.hidden);
                    prop_assert!((state.scroll_delta - pending).abs() < 1e-9);
                }

                if state.hidden != before.hidden {
                    prop_assert_eq!(state.scroll_delta, 0.0);
                }
            }
        }
    }
}
