//! Open/closed state of the navigation menu.
//!
//! The toggle button flips the state; the overlay, a menu link and the
//! Escape key only ever close it.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTrigger {
    Toggle,
    Overlay,
    Link,
    Escape,
}

impl NavTrigger {
    /// Keyboard trigger for a `KeyboardEvent.key` value.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

impl NavState {
    pub fn from_open(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn apply(self, trigger: NavTrigger) -> Self {
        match trigger {
            NavTrigger::Toggle => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            NavTrigger::Overlay | NavTrigger::Link | NavTrigger::Escape => Self::Closed,
        }
    }

    pub fn markers(self) -> NavMarkers {
        let on = self.is_open();
        NavMarkers {
            toggle_active: on,
            panel_active: on,
            overlay_active: on,
            scroll_locked: on,
        }
    }
}

/// The four page flags that mirror the menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMarkers {
    pub toggle_active: bool,
    pub panel_active: bool,
    pub overlay_active: bool,
    pub scroll_locked: bool,
}

impl NavMarkers {
    pub fn consistent(&self) -> bool {
        self.toggle_active == self.panel_active
            && self.panel_active == self.overlay_active
            && self.overlay_active == self.scroll_locked
    }

    /// Value for `body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            ""
        }
    }
}
