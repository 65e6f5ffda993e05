//! Hamburger menu: toggle button, sliding panel and optional dimming overlay.

use crate::dom::{self, Listener};
use doug_core::constants::{
    ACTIVE_CLASS, SEL_NAV_LINKS, SEL_NAV_MENU, SEL_NAV_OVERLAY, SEL_NAV_TOGGLE,
};
use doug_core::{NavMarkers, NavState, NavTrigger};
use std::rc::Rc;
use web_sys as web;

struct NavParts {
    toggle: web::Element,
    panel: web::Element,
    overlay: Option<web::Element>,
    body: Option<web::HtmlElement>,
}

impl NavParts {
    // The panel's class is the source of truth for open/closed.
    fn state(&self) -> NavState {
        NavState::from_open(self.panel.class_list().contains(ACTIVE_CLASS))
    }

    fn handle(&self, trigger: NavTrigger) {
        let current = self.state();
        let next = current.apply(trigger);
        if next == current {
            return;
        }
        self.render(next.markers());
        log::debug!("[nav] {:?} -> {:?} via {:?}", current, next, trigger);
    }

    fn render(&self, markers: NavMarkers) {
        dom::set_class(&self.toggle, ACTIVE_CLASS, markers.toggle_active);
        dom::set_class(&self.panel, ACTIVE_CLASS, markers.panel_active);
        if let Some(overlay) = &self.overlay {
            dom::set_class(overlay, ACTIVE_CLASS, markers.overlay_active);
        }
        if let Some(body) = &self.body {
            _ = body.style().set_property("overflow", markers.body_overflow());
        }
    }
}

pub struct NavMenu {
    parts: Rc<NavParts>,
    _listeners: Vec<Listener>,
}

impl NavMenu {
    pub fn state(&self) -> NavState {
        self.parts.state()
    }
}

pub fn install(document: &web::Document) -> anyhow::Result<Option<NavMenu>> {
    let (Some(toggle), Some(panel)) = (
        dom::query_one(document, SEL_NAV_TOGGLE),
        dom::query_one(document, SEL_NAV_MENU),
    ) else {
        return Ok(None);
    };
    let parts = Rc::new(NavParts {
        toggle,
        panel,
        overlay: dom::query_one(document, SEL_NAV_OVERLAY),
        body: document.body(),
    });

    let on = |trigger: NavTrigger| {
        let p = parts.clone();
        move |_: web::Event| p.handle(trigger)
    };

    let mut listeners = vec![Listener::new(&parts.toggle, "click", on(NavTrigger::Toggle))?];
    if let Some(overlay) = &parts.overlay {
        listeners.push(Listener::new(overlay, "click", on(NavTrigger::Overlay))?);
    }
    for link in dom::query_all_in(&parts.panel, SEL_NAV_LINKS) {
        listeners.push(Listener::new(&link, "click", on(NavTrigger::Link))?);
    }

    let p = parts.clone();
    listeners.push(Listener::new(document, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(trigger) = NavTrigger::from_key(&ev.key()) {
            p.handle(trigger);
        }
    })?);

    Ok(Some(NavMenu {
        parts,
        _listeners: listeners,
    }))
}
