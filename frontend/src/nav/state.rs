use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Desktop services mega-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dropdown {
    #[default]
    Closed,
    Open,
}

/// Nested "Services" group inside the mobile overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accordion {
    #[default]
    Collapsed,
    Expanded,
}

/// Full-screen mobile overlay. The accordion only exists while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open { accordion: Accordion },
}

/// Everything that can happen to a navigation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Scrolled(bool),
    TriggerClicked,
    PointerEntered,
    HoverCloseElapsed,
    PointerDownOutside,
    HamburgerClicked,
    CloseClicked,
    DestinationClicked,
    AccordionToggled,
    Unmounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    dropdown: Dropdown,
    mobile: MobileMenu,
    mounted: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            scrolled: false,
            dropdown: Dropdown::Closed,
            mobile: MobileMenu::Closed,
            mounted: true,
        }
    }
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn dropdown(&self) -> Dropdown {
        self.dropdown
    }

    pub fn mobile(&self) -> MobileMenu {
        self.mobile
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown() == Dropdown::Open
    }

    pub fn mobile_menu_open(&self) -> bool {
        matches!(self.mobile(), MobileMenu::Open { .. })
    }

    pub fn accordion_open(&self) -> bool {
        matches!(
            self.mobile(),
            MobileMenu::Open {
                accordion: Accordion::Expanded
            }
        )
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applies one action in place. Returns whether anything changed.
    ///
    /// Once `Unmounted` has been applied every further action is ignored, so a
    /// timer callback that slips through after teardown cannot touch the state.
    pub fn apply(&mut self, action: NavAction) -> bool {
        if !self.is_mounted() {
            debug!("nav: ignoring {:?} after unmount", action);
            return false;
        }

        let before = self.clone();
        match action {
            NavAction::Scrolled(scrolled) => self.scrolled = scrolled,
            NavAction::TriggerClicked => {
                self.dropdown = match self.dropdown {
                    Dropdown::Closed => Dropdown::Open,
                    Dropdown::Open => Dropdown::Closed,
                };
            }
            NavAction::PointerEntered => self.dropdown = Dropdown::Open,
            NavAction::HoverCloseElapsed | NavAction::PointerDownOutside => {
                self.dropdown = Dropdown::Closed;
            }
            NavAction::HamburgerClicked => {
                // Every open starts collapsed, whatever was there before.
                self.mobile = MobileMenu::Open {
                    accordion: Accordion::Collapsed,
                };
            }
            NavAction::CloseClicked => self.mobile = MobileMenu::Closed,
            NavAction::DestinationClicked => {
                self.mobile = MobileMenu::Closed;
                self.dropdown = Dropdown::Closed;
            }
            NavAction::AccordionToggled => {
                if let MobileMenu::Open { accordion } = self.mobile {
                    let accordion = match accordion {
                        Accordion::Collapsed => Accordion::Expanded,
                        Accordion::Expanded => Accordion::Collapsed,
                    };
                    self.mobile = MobileMenu::Open { accordion };
                }
            }
            NavAction::Unmounted => {
                *self = Self {
                    mounted: false,
                    ..Self::default()
                };
            }
        }

        let changed = *self != before;
        if changed {
            debug!(
                "nav: {:?} -> dropdown {:?}, mobile {:?}",
                action, self.dropdown, self.mobile
            );
        }
        changed
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
