use crate::dom;
use crate::timers::Interval;
use doug_core::constants::SEL_GLITCH;
use doug_core::{Chance, EffectsConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub struct GlitchUnit {
    _timers: Vec<Interval>,
}

pub fn install(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<Option<GlitchUnit>> {
    let targets: Vec<web::HtmlElement> = dom::query_all(document, SEL_GLITCH)
        .into_iter()
        .filter_map(dom::as_html)
        .collect();
    if targets.is_empty() {
        return Ok(None);
    }

    let chance = Chance::new(cfg.glitch_probability);
    let mut timers = Vec::with_capacity(targets.len());
    for el in targets {
        let mut rng = StdRng::from_entropy();
        timers.push(Interval::start(cfg.glitch_check_ms, move || {
            if chance.roll(&mut rng) {
                restart_animation(&el);
            }
        })?);
    }
    Ok(Some(GlitchUnit { _timers: timers }))
}

// Dropping the inline animation and reading layout makes the stylesheet
// animation start again from its first frame.
fn restart_animation(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("animation", "none");
    _ = el.offset_height();
    _ = style.remove_property("animation");
}
