use yew::prelude::*;

/// A subtree of the page that a pointer target can fall into.
pub trait Region<T: ?Sized> {
    /// Inclusive: the region's own root counts as inside.
    fn contains(&self, target: &T) -> bool;
}

impl Region<web_sys::Node> for NodeRef {
    fn contains(&self, target: &web_sys::Node) -> bool {
        // An unbound ref (not rendered yet) contains nothing.
        self.get()
            .map_or(false, |root| root.contains(Some(target)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    Inside,
    Outside,
}

/// Classifies a pointer-down against the tracked regions (trigger and panel).
pub fn classify<T, R>(target: &T, regions: &[R]) -> PointerDown
where
    T: ?Sized,
    R: Region<T>,
{
    if regions.iter().any(|region| region.contains(target)) {
        PointerDown::Inside
    } else {
        PointerDown::Outside
    }
}

/// Something listeners can be removed from.
pub trait ListenerHost {
    type Token;

    fn detach(&self, token: Self::Token);
}

/// Owns one attached listener and removes it exactly once, on drop.
pub struct Subscription<H: ListenerHost> {
    host: H,
    token: Option<H::Token>,
}

impl<H: ListenerHost> Subscription<H> {
    /// Wraps a listener that `host` has already attached.
    pub fn new(host: H, token: H::Token) -> Self {
        Self {
            host,
            token: Some(token),
        }
    }
}

impl<H: ListenerHost> Drop for Subscription<H> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.host.detach(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::nav::state::{NavAction, NavState};

    /// Slash-separated element path, e.g. `nav/services/trigger/label`.
    struct Path(&'static str);

    impl Region<str> for Path {
        fn contains(&self, target: &str) -> bool {
            target == self.0
                || target
                    .strip_prefix(self.0)
                    .map_or(false, |rest| rest.starts_with('/'))
        }
    }

    const TRIGGER: Path = Path("nav/services/trigger");
    const PANEL: Path = Path("nav/services/panel");

    fn outside_press(state: &mut NavState, target: &str) {
        if classify(target, &[TRIGGER, PANEL]) == PointerDown::Outside {
            state.apply(NavAction::PointerDownOutside);
        }
    }

    #[test]
    fn trigger_itself_is_inside() {
        assert_eq!(classify("nav/services/trigger", &[TRIGGER, PANEL]), PointerDown::Inside);
    }

    #[test]
    fn descendants_are_inside() {
        for target in [
            "nav/services/trigger/label",
            "nav/services/panel",
            "nav/services/panel/grid/card/3/title",
        ] {
            assert_eq!(classify(target, &[TRIGGER, PANEL]), PointerDown::Inside, "{target}");
        }
    }

    #[test]
    fn siblings_and_ancestors_are_outside() {
        for target in [
            "nav",
            "nav/services",
            "nav/services/trigger2",
            "nav/services/panelist",
            "main/hero/cta",
        ] {
            assert_eq!(classify(target, &[TRIGGER, PANEL]), PointerDown::Outside, "{target}");
        }
    }

    #[test]
    fn no_regions_means_everything_is_outside() {
        let none: [Path; 0] = [];
        assert_eq!(classify("nav/services/trigger", &none), PointerDown::Outside);
    }

    #[test]
    fn press_inside_keeps_dropdown_open() {
        let mut state = NavState::default();
        state.apply(NavAction::TriggerClicked);
        outside_press(&mut state, "nav/services/trigger");
        outside_press(&mut state, "nav/services/panel/grid/card/0");
        assert!(state.dropdown_open());
    }

    #[test]
    fn press_outside_closes_dropdown() {
        let mut state = NavState::default();
        state.apply(NavAction::TriggerClicked);
        outside_press(&mut state, "main/hero");
        assert!(!state.dropdown_open());
    }

    #[derive(Clone, Default)]
    struct CountingHost {
        detached: Rc<RefCell<Vec<u32>>>,
    }

    impl ListenerHost for CountingHost {
        type Token = u32;

        fn detach(&self, token: u32) {
            self.detached.borrow_mut().push(token);
        }
    }

    #[test]
    fn subscription_detaches_exactly_once() {
        let host = CountingHost::default();
        let subscription = Subscription::new(host.clone(), 7);
        assert!(host.detached.borrow().is_empty());

        drop(subscription);
        assert_eq!(*host.detached.borrow(), vec![7]);
    }

    #[test]
    fn each_mount_pairs_with_one_detach() {
        let host = CountingHost::default();
        for token in 0..3 {
            let _subscription = Subscription::new(host.clone(), token);
        }
        assert_eq!(*host.detached.borrow(), vec![0, 1, 2]);
    }
}
