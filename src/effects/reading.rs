//! Font family and text size switches for the chapter body.

use crate::dom::{self, Listener};
use doug_core::constants::{
    ACTIVE_CLASS, SEL_FONT_BUTTONS, SEL_READING_SETTINGS, SEL_SIZE_BUTTONS, SEL_STORY_TEXT,
};
use doug_core::{KeyValueStore, ReadingFont, ReadingPrefs, ReadingSize};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use web_sys as web;

const FONT_ATTR: &str = "data-font";
const SIZE_ATTR: &str = "data-size";

struct ReadingView {
    story: web::Element,
    settings: web::Element,
}

impl ReadingView {
    fn apply_font(&self, font: ReadingFont) {
        dom::swap_class(&self.story, &ReadingFont::CLASSES, font.css_class());
        self.mark_active(SEL_FONT_BUTTONS, FONT_ATTR, font.as_str());
    }

    fn apply_size(&self, size: ReadingSize) {
        dom::swap_class(&self.story, &ReadingSize::CLASSES, size.css_class());
        self.mark_active(SEL_SIZE_BUTTONS, SIZE_ATTR, size.as_str());
    }

    fn mark_active(&self, selector: &str, attr: &str, value: &str) {
        for btn in dom::query_all_in(&self.settings, selector) {
            let on = btn.get_attribute(attr).as_deref() == Some(value);
            dom::set_class(&btn, ACTIVE_CLASS, on);
        }
    }
}

pub struct ReadingSettings {
    prefs: Rc<RefCell<ReadingPrefs>>,
    _clicks: Vec<Listener>,
}

impl ReadingSettings {
    pub fn prefs(&self) -> ReadingPrefs {
        *self.prefs.borrow()
    }
}

pub fn install<S>(document: &web::Document, store: Rc<RefCell<S>>) -> anyhow::Result<Option<ReadingSettings>>
where
    S: KeyValueStore + 'static,
{
    let (Some(story), Some(settings)) = (
        dom::query_one(document, SEL_STORY_TEXT),
        dom::query_one(document, SEL_READING_SETTINGS),
    ) else {
        return Ok(None);
    };
    let view = Rc::new(ReadingView { story, settings });

    let loaded = ReadingPrefs::load(&*store.borrow());
    view.apply_font(loaded.font);
    view.apply_size(loaded.size);
    log::debug!("[reading] font={} size={}", loaded.font, loaded.size);
    let prefs = Rc::new(RefCell::new(loaded));

    let mut clicks = Vec::new();
    for btn in dom::query_all_in(&view.settings, SEL_FONT_BUTTONS) {
        let (view, prefs, store, source) = (view.clone(), prefs.clone(), store.clone(), btn.clone());
        clicks.push(Listener::new(&btn, "click", move |_: web::Event| {
            let Some(font) = parse_attr::<ReadingFont>(&source, FONT_ATTR) else {
                return;
            };
            view.apply_font(font);
            prefs.borrow_mut().set_font(&mut *store.borrow_mut(), font);
        })?);
    }
    for btn in dom::query_all_in(&view.settings, SEL_SIZE_BUTTONS) {
        let (view, prefs, store, source) = (view.clone(), prefs.clone(), store.clone(), btn.clone());
        clicks.push(Listener::new(&btn, "click", move |_: web::Event| {
            let Some(size) = parse_attr::<ReadingSize>(&source, SIZE_ATTR) else {
                return;
            };
            view.apply_size(size);
            prefs.borrow_mut().set_size(&mut *store.borrow_mut(), size);
        })?);
    }

    Ok(Some(ReadingSettings {
        prefs,
        _clicks: clicks,
    }))
}

fn parse_attr<T>(el: &web::Element, attr: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = el.get_attribute(attr)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[reading] ignoring button: {}", e);
            None
        }
    }
}
