use super::dispatch::{classify, scroll_target, ClickCommand, ClickTarget};
use super::frame::FrameGate;
use super::menu::{MenuEffect, MenuState};
use super::state::{HeaderFlags, HeaderState};
use crate::config::HeaderConfig;

/// The parts of the document the coordinator reads and writes. Every method
/// is a no-op (or `None`) when the element it needs is missing.
pub trait Page {
    fn scroll_y(&self) -> f64;
    fn apply_header_flags(&self, flags: HeaderFlags);
    /// Both the toggle and the navigation panel are present.
    fn has_menu(&self) -> bool;
    fn set_menu_active(&self, open: bool);
    fn body_overflow(&self) -> String;
    fn set_body_overflow(&self, value: &str);
    /// Viewport-relative top of the element with this id.
    fn target_top(&self, id: &str) -> Option<f64>;
    fn header_height(&self) -> Option<f64>;
    fn reveal_section(&self, id: &str);
    fn smooth_scroll_to(&self, top: f64);
    fn push_fragment(&self, href: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub prevent_default: bool,
}

pub struct HeaderCoordinator<P: Page> {
    page: P,
    config: HeaderConfig,
    header: HeaderState,
    menu: MenuState,
    gate: FrameGate,
    applied: Option<HeaderFlags>,
}

impl<P: Page> HeaderCoordinator<P> {
    pub fn new(page: P, config: HeaderConfig) -> Self {
        Self {
            page,
            config,
            header: HeaderState::default(),
            menu: MenuState::default(),
            gate: FrameGate::default(),
            applied: None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    #[cfg(test)]
    pub fn header_state(&self) -> &HeaderState {
        &self.header
    }

    #[cfg(test)]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Raw scroll event. True means the caller has to request an animation
    /// frame that ends in [`Self::on_frame`].
    pub fn on_scroll_event(&mut self) -> bool {
        self.gate.request()
    }

    /// The frame that [`Self::on_scroll_event`] asked for will never arrive.
    pub fn cancel_frame(&mut self) {
        self.gate.cancel();
    }

    pub fn on_frame(&mut self) {
        self.gate.begin_frame();
        let flags = self.header.on_scroll(self.page.scroll_y(), &self.config);
        if self.applied != Some(flags) {
            self.page.apply_header_flags(flags);
            self.applied = Some(flags);
        }
    }

    pub fn on_click(&mut self, target: &ClickTarget) -> ClickOutcome {
        match classify(target) {
            ClickCommand::ToggleMenu => {
                self.toggle_menu();
                ClickOutcome::default()
            }
            ClickCommand::Navigate {
                href,
                id,
                inside_menu,
            } => match self.page.target_top(&id) {
                Some(top) => {
                    self.navigate(&href, &id, top);
                    ClickOutcome {
                        prevent_default: true,
                    }
                }
                None => {
                    log::debug!("no element for {}, leaving it to the browser", href);
                    self.outside_click(inside_menu);
                    ClickOutcome::default()
                }
            },
            ClickCommand::Outside { inside_menu } => {
                self.outside_click(inside_menu);
                ClickOutcome::default()
            }
        }
    }

    fn toggle_menu(&mut self) {
        if !self.page.has_menu() {
            return;
        }
        let effect = self.menu.toggle(&self.page.body_overflow());
        self.apply_menu(effect);
        log::debug!("mobile menu open: {}", self.menu.is_open());
    }

    fn outside_click(&mut self, inside_menu: bool) {
        if !self.page.has_menu() {
            return;
        }
        let effect = self.menu.outside_click(inside_menu, false);
        self.apply_menu(effect);
    }

    fn close_menu(&mut self) {
        if !self.page.has_menu() {
            return;
        }
        let effect = self.menu.close();
        self.apply_menu(effect);
    }

    fn navigate(&mut self, href: &str, id: &str, target_top: f64) {
        self.close_menu();
        self.page.reveal_section(id);

        let header_height = self
            .page
            .header_height()
            .unwrap_or(self.config.fallback_header_height);
        let top = scroll_target(target_top, self.page.scroll_y(), header_height);
        log::debug!("scrolling to {} at {}", href, top);

        self.page.smooth_scroll_to(top);
        self.page.push_fragment(href);
    }

    fn apply_menu(&self, effect: MenuEffect) {
        match effect {
            MenuEffect::Opened => {
                self.page.set_menu_active(true);
                self.page.set_body_overflow("hidden");
            }
            MenuEffect::Closed { restore_overflow } => {
                self.page.set_menu_active(false);
                self.page.set_body_overflow(&restore_overflow);
            }
            MenuEffect::Unchanged => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePage {
        scroll_y: Cell<f64>,
        header: Option<f64>,
        menu: bool,
        targets: HashMap<String, f64>,
        header_writes: RefCell<Vec<HeaderFlags>>,
        menu_active: Cell<bool>,
        overflow: RefCell<String>,
        revealed: RefCell<Vec<String>>,
        scrolled_to: RefCell<Vec<f64>>,
        fragment: RefCell<Option<String>>,
    }

    impl FakePage {
        fn landing() -> Self {
            let mut targets = HashMap::new();
            targets.insert("pricing".to_string(), 640.0);
            Self {
                header: Some(72.0),
                menu: true,
                targets,
                ..Default::default()
            }
        }
    }

    impl Page for FakePage {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }
        fn apply_header_flags(&self, flags: HeaderFlags) {
            if self.header.is_some() {
                self.header_writes.borrow_mut().push(flags);
            }
        }
        fn has_menu(&self) -> bool {
            self.menu
        }
        fn set_menu_active(&self, open: bool) {
            self.menu_active.set(open);
        }
        fn body_overflow(&self) -> String {
            self.overflow.borrow().clone()
        }
        fn set_body_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
        }
        fn target_top(&self, id: &str) -> Option<f64> {
            self.targets.get(id).copied()
        }
        fn header_height(&self) -> Option<f64> {
            self.header
        }
        fn reveal_section(&self, id: &str) {
            self.revealed.borrow_mut().push(id.to_string());
        }
        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }
        fn push_fragment(&self, href: &str) {
            *self.fragment.borrow_mut() = Some(href.to_string());
        }
    }

    fn toggle() -> ClickTarget {
        ClickTarget {
            inside_toggle: true,
            ..Default::default()
        }
    }

    fn anchor(href: &str, inside_menu: bool) -> ClickTarget {
        ClickTarget {
            inside_toggle: false,
            inside_menu,
            anchor_href: Some(href.to_string()),
        }
    }

    #[test]
    fn scroll_events_coalesce_into_one_frame() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        assert!(coordinator.on_scroll_event());
        coordinator.page().scroll_y.set(10.0);
        assert!(!coordinator.on_scroll_event());
        coordinator.page().scroll_y.set(35.0);
        assert!(!coordinator.on_scroll_event());

        coordinator.on_frame();
        // one evaluation with the latest position: 35 > 20
        assert!(coordinator.header_state().hidden);
        assert_eq!(coordinator.header_state().last_scroll_y, 35.0);
        assert!(coordinator.on_scroll_event());
    }

    #[test]
    fn failed_frame_request_does_not_stall_scrolling() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        assert!(coordinator.on_scroll_event());
        coordinator.cancel_frame();

        coordinator.page().scroll_y.set(40.0);
        assert!(coordinator.on_scroll_event());
        coordinator.on_frame();
        assert!(coordinator.header_state().hidden);
    }

    #[test]
    fn header_is_written_only_on_change() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        for y in [0.0, 5.0, 10.0, 15.0] {
            coordinator.page().scroll_y.set(y);
            coordinator.on_frame();
        }
        assert_eq!(coordinator.page().header_writes.borrow().len(), 1);

        coordinator.page().scroll_y.set(60.0);
        coordinator.on_frame();
        assert_eq!(
            coordinator.page().header_writes.borrow().last(),
            Some(&HeaderFlags {
                hidden: true,
                sticky: true
            })
        );
    }

    #[test]
    fn toggle_twice_locks_then_unlocks() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        coordinator.on_click(&toggle());
        assert!(coordinator.menu_open());
        assert!(coordinator.page().menu_active.get());
        assert_eq!(coordinator.page().body_overflow(), "hidden");

        coordinator.on_click(&toggle());
        assert!(!coordinator.menu_open());
        assert!(!coordinator.page().menu_active.get());
        assert_eq!(coordinator.page().body_overflow(), "");
    }

    #[test]
    fn outside_click_restores_prior_overflow() {
        let page = FakePage::landing();
        page.set_body_overflow("auto");
        let mut coordinator = HeaderCoordinator::new(page, HeaderConfig::default());

        coordinator.on_click(&toggle());
        coordinator.on_click(&ClickTarget {
            inside_menu: true,
            ..Default::default()
        });
        assert!(coordinator.menu_open());

        coordinator.on_click(&ClickTarget::default());
        assert!(!coordinator.menu_open());
        assert_eq!(coordinator.page().body_overflow(), "auto");
    }

    #[test]
    fn menu_never_touches_sticky() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        coordinator.page().scroll_y.set(120.0);
        coordinator.on_frame();
        let before = coordinator.header_state().clone();

        coordinator.on_click(&toggle());
        coordinator.on_click(&toggle());
        assert_eq!(coordinator.header_state(), &before);
        assert!(coordinator.header_state().sticky);
    }

    #[test]
    fn resolvable_anchor_navigates_and_closes_menu() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        coordinator.page().scroll_y.set(200.0);
        coordinator.on_click(&toggle());

        let outcome = coordinator.on_click(&anchor("#pricing", true));
        assert!(outcome.prevent_default);
        assert!(!coordinator.menu_open());
        assert_eq!(coordinator.page().body_overflow(), "");
        assert_eq!(*coordinator.page().scrolled_to.borrow(), vec![640.0 + 200.0 - 72.0]);
        assert_eq!(coordinator.page().fragment.borrow().as_deref(), Some("#pricing"));
        assert_eq!(*coordinator.page().revealed.borrow(), vec!["pricing".to_string()]);
    }

    #[test]
    fn missing_header_uses_fallback_height() {
        let page = FakePage {
            header: None,
            ..FakePage::landing()
        };
        let mut coordinator = HeaderCoordinator::new(page, HeaderConfig::default());
        coordinator.on_click(&anchor("#pricing", false));
        assert_eq!(*coordinator.page().scrolled_to.borrow(), vec![560.0]);
    }

    #[test]
    fn unresolvable_anchor_leaves_everything_alone() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        coordinator.on_click(&toggle());

        let outcome = coordinator.on_click(&anchor("#nowhere", true));
        assert!(!outcome.prevent_default);
        assert!(coordinator.menu_open());
        assert!(coordinator.page().scrolled_to.borrow().is_empty());
        assert!(coordinator.page().fragment.borrow().is_none());
    }

    #[test]
    fn unresolvable_anchor_outside_menu_still_counts_as_outside_click() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        coordinator.on_click(&toggle());

        let outcome = coordinator.on_click(&anchor("#nowhere", false));
        assert!(!outcome.prevent_default);
        assert!(!coordinator.menu_open());
        assert_eq!(coordinator.page().body_overflow(), "");
        assert!(coordinator.page().scrolled_to.borrow().is_empty());
        assert!(coordinator.page().fragment.borrow().is_none());
    }

    #[test]
    fn unresolvable_anchor_with_menu_closed_changes_nothing() {
        let mut coordinator = HeaderCoordinator::new(FakePage::landing(), HeaderConfig::default());
        let outcome = coordinator.on_click(&anchor("#nowhere", false));
        assert!(!outcome.prevent_default);
        assert!(!coordinator.menu_open());
        assert!(!coordinator.page().menu_active.get());
        assert_eq!(coordinator.page().body_overflow(), "");
    }

    #[test]
    fn page_without_menu_ignores_toggle() {
        let page = FakePage {
            menu: false,
            ..FakePage::landing()
        };
        let mut coordinator = HeaderCoordinator::new(page, HeaderConfig::default());
        coordinator.on_click(&toggle());
        assert!(!coordinator.menu_open());
        assert_eq!(coordinator.page().body_overflow(), "");
    }
}
