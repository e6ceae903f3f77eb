//! Open/closed state of the navbar's collapsible panels

/// A panel that opens on its trigger and closes on click-away.
///
/// Starts closed on every page load. Clicking the trigger of an open panel
/// leaves it open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn open(&mut self) {
        *self = Disclosure::Open;
    }

    pub fn click_away(&mut self) {
        *self = Disclosure::Closed;
    }

    pub fn is_open(&self) -> bool {
        *self == Disclosure::Open
    }

    /// Value for the trigger's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Value for the panel's `data-state` attribute
    pub fn data_state(&self) -> &'static str {
        if self.is_open() { "open" } else { "closed" }
    }
}

/// Where a click inside the page landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    MobileTrigger,
    MobilePanel,
    ProfileTrigger,
    ProfilePanel,
    Elsewhere,
}

/// Both panels of the bar. A click is seen by each panel on its own:
/// its trigger opens it, a click inside it is ignored, anything else is click-away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenus {
    pub mobile: Disclosure,
    pub profile: Disclosure,
}

impl NavMenus {
    pub fn click(&mut self, target: NavTarget) {
        apply(
            &mut self.mobile,
            target,
            NavTarget::MobileTrigger,
            NavTarget::MobilePanel,
        );
        apply(
            &mut self.profile,
            target,
            NavTarget::ProfileTrigger,
            NavTarget::ProfilePanel,
        );
    }
}

fn apply(panel: &mut Disclosure, target: NavTarget, trigger: NavTarget, inside: NavTarget) {
    if target == trigger {
        panel.open();
    } else if target != inside {
        panel.click_away();
    }
}
