//! Responsive site navigation.
//!
//! Wide viewports get a services mega-menu opened by click or hover (with a
//! short hover-intent grace period) and closed by a press anywhere outside it.
//! Narrow viewports get a full-screen overlay with a collapsible services group.
//! Which variant is visible is decided by CSS alone.

mod component;
pub mod hover_intent;
pub mod outside_click;
pub mod state;
#[cfg(test)]
mod testing;

pub use component::Nav;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::hover_intent::HoverIntent;
    use super::outside_click::{classify, PointerDown, Region};
    use super::state::{Accordion, Dropdown, MobileMenu, NavAction, NavState};
    use super::testing::ManualScheduler;
    use crate::config::HOVER_CLOSE_DELAY_MS;

    struct Subtree(&'static str);

    impl Region<str> for Subtree {
        fn contains(&self, target: &str) -> bool {
            target == self.0 || target.starts_with(&format!("{}/", self.0))
        }
    }

    /// Wires state, sink and timer the same way the `Nav` component does.
    struct Harness {
        state: Rc<RefCell<NavState>>,
        log: Rc<RefCell<Vec<NavAction>>>,
        sink: Callback<NavAction>,
        clock: ManualScheduler,
        hover: HoverIntent<ManualScheduler>,
    }

    impl Harness {
        fn mount() -> Self {
            let state = Rc::new(RefCell::new(NavState::default()));
            let log = Rc::new(RefCell::new(Vec::new()));
            let sink = {
                let state = Rc::clone(&state);
                let log = Rc::clone(&log);
                Callback::from(move |action: NavAction| {
                    log.borrow_mut().push(action);
                    state.borrow_mut().apply(action);
                })
            };
            let clock = ManualScheduler::default();
            let hover = HoverIntent::new(clock.clone(), HOVER_CLOSE_DELAY_MS);
            Self {
                state,
                log,
                sink,
                clock,
                hover,
            }
        }

        fn click(&self, action: NavAction) {
            self.sink.emit(action);
        }

        fn enter(&mut self) {
            self.hover.enter(&self.sink);
        }

        fn leave(&mut self) {
            self.hover.leave(&self.sink);
        }

        fn press(&self, target: &str) {
            let regions = [Subtree("nav/services/trigger"), Subtree("nav/services/panel")];
            if classify(target, &regions) == PointerDown::Outside {
                self.sink.emit(NavAction::PointerDownOutside);
            }
        }

        fn wait(&self, ms: u32) {
            self.clock.advance(u64::from(ms));
        }

        fn unmount(&mut self) {
            self.hover.cancel();
            self.sink.emit(NavAction::Unmounted);
        }

        fn snapshot(&self) -> NavState {
            self.state.borrow().clone()
        }
    }

    #[test]
    fn scenario_click_open_then_click_close() {
        let nav = Harness::mount();
        assert_eq!(nav.snapshot().dropdown(), Dropdown::Closed);

        nav.click(NavAction::TriggerClicked);
        assert_eq!(nav.snapshot().dropdown(), Dropdown::Open);

        nav.click(NavAction::TriggerClicked);
        assert_eq!(nav.snapshot().dropdown(), Dropdown::Closed);
    }

    #[test]
    fn scenario_mobile_menu_with_accordion() {
        let nav = Harness::mount();

        nav.click(NavAction::HamburgerClicked);
        assert_eq!(
            nav.snapshot().mobile(),
            MobileMenu::Open {
                accordion: Accordion::Collapsed
            }
        );

        nav.click(NavAction::AccordionToggled);
        assert_eq!(
            nav.snapshot().mobile(),
            MobileMenu::Open {
                accordion: Accordion::Expanded
            }
        );

        nav.click(NavAction::CloseClicked);
        let state = nav.snapshot();
        assert_eq!(state.mobile(), MobileMenu::Closed);
        assert!(!state.accordion_open());
    }

    #[test]
    fn scenario_outside_press_closes_clicked_dropdown() {
        let nav = Harness::mount();
        nav.click(NavAction::TriggerClicked);
        nav.press("nav/services/trigger");
        assert!(nav.snapshot().dropdown_open());

        nav.press("main/services-grid/card/2");
        assert!(!nav.snapshot().dropdown_open());
    }

    #[test]
    fn quick_reentry_never_closes() {
        let mut nav = Harness::mount();
        nav.enter();
        nav.wait(40);
        nav.leave();
        nav.wait(HOVER_CLOSE_DELAY_MS - 1);
        nav.enter();
        assert!(nav.snapshot().dropdown_open());

        nav.wait(HOVER_CLOSE_DELAY_MS * 10);
        assert!(nav.snapshot().dropdown_open());
        assert!(!nav.log.borrow().contains(&NavAction::HoverCloseElapsed));
    }

    #[test]
    fn leaving_closes_after_delay() {
        let mut nav = Harness::mount();
        nav.enter();
        nav.leave();
        nav.wait(HOVER_CLOSE_DELAY_MS - 1);
        assert!(nav.snapshot().dropdown_open());

        nav.wait(1);
        assert!(!nav.snapshot().dropdown_open());
    }

    #[test]
    fn hover_timer_does_not_disturb_click_parity() {
        let mut nav = Harness::mount();
        nav.click(NavAction::TriggerClicked);
        nav.leave();
        nav.enter();
        nav.click(NavAction::TriggerClicked);
        nav.wait(HOVER_CLOSE_DELAY_MS * 2);
        assert!(!nav.snapshot().dropdown_open());

        nav.click(NavAction::TriggerClicked);
        assert!(nav.snapshot().dropdown_open());
    }

    #[test]
    fn unmount_with_pending_timer_is_silent() {
        let mut nav = Harness::mount();
        nav.enter();
        nav.leave();
        nav.unmount();
        let after_unmount = nav.snapshot();

        nav.wait(HOVER_CLOSE_DELAY_MS * 4);
        assert_eq!(nav.snapshot(), after_unmount);
        assert!(!nav.log.borrow().contains(&NavAction::HoverCloseElapsed));
        assert_eq!(nav.clock.pending(), 0);
    }

    #[test]
    fn stale_close_after_unmount_is_ignored() {
        let nav = Harness::mount();
        nav.click(NavAction::HamburgerClicked);
        nav.click(NavAction::Unmounted);
        nav.click(NavAction::HoverCloseElapsed);
        nav.click(NavAction::TriggerClicked);

        let state = nav.snapshot();
        assert!(!state.is_mounted());
        assert!(!state.dropdown_open());
        assert!(!state.mobile_menu_open());
    }
}
