use crate::dom::{self, Listener};
use doug_core::constants::SEL_FRAGMENT_LINKS;
use doug_core::scroll::fragment_selector;
use web_sys as web;

pub struct ScrollUnit {
    _clicks: Vec<Listener>,
}

pub fn install(document: &web::Document) -> anyhow::Result<Option<ScrollUnit>> {
    let anchors = dom::query_all(document, SEL_FRAGMENT_LINKS);
    if anchors.is_empty() {
        return Ok(None);
    }
    let mut clicks = Vec::with_capacity(anchors.len());
    for anchor in anchors {
        let doc = document.clone();
        let link = anchor.clone();
        clicks.push(Listener::new(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroll_to_fragment(&doc, &href);
        })?);
    }
    Ok(Some(ScrollUnit { _clicks: clicks }))
}

/// Smooth-scrolls to the element `href` names. Returns whether a target was
/// found.
pub fn scroll_to_fragment(document: &web::Document, href: &str) -> bool {
    let Some(selector) = fragment_selector(href) else {
        return false;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        Ok(None) => false,
        Err(e) => {
            log::debug!("[scroll] {:?} is not a selector: {:?}", href, e);
            false
        }
    }
}
