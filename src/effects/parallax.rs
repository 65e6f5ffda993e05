use crate::dom::{self, Listener};
use doug_core::constants::SEL_PARALLAX_TARGET;
use doug_core::{parallax, EffectsConfig};
use glam::Vec2;
use web_sys as web;

pub struct ParallaxUnit {
    _mousemove: Listener,
}

pub fn install(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<Option<ParallaxUnit>> {
    let Some(portal) = dom::query_one(document, SEL_PARALLAX_TARGET).and_then(dom::as_html) else {
        return Ok(None);
    };
    let divisor = cfg.parallax_divisor;
    let mousemove = Listener::new(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let off = parallax::offset(pointer, dom::viewport_size(&window), divisor);
        _ = portal
            .style()
            .set_property("transform", &parallax::transform_css(off));
    })?;
    Ok(Some(ParallaxUnit {
        _mousemove: mousemove,
    }))
}
