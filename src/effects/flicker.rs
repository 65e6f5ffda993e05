use crate::dom;
use crate::timers::{Deferred, Interval};
use doug_core::constants::{FLICKER_DIM_OPACITY, FLICKER_FULL_OPACITY, SEL_STAT_VALUE};
use doug_core::{Chance, EffectsConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use web_sys as web;

pub struct FlickerUnit {
    _timers: Vec<Interval>,
    _restores: Vec<Rc<Deferred>>,
}

pub fn install(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<Option<FlickerUnit>> {
    let stats: Vec<web::HtmlElement> = dom::query_all(document, SEL_STAT_VALUE)
        .into_iter()
        .filter_map(dom::as_html)
        .collect();
    if stats.is_empty() {
        return Ok(None);
    }

    let chance = Chance::new(cfg.flicker_probability);
    let hold_ms = cfg.flicker_hold_ms;
    let mut timers = Vec::with_capacity(stats.len());
    let mut restores = Vec::with_capacity(stats.len());
    for el in stats {
        let el_restore = el.clone();
        let restore = Rc::new(Deferred::new(move || {
            _ = el_restore.style().set_property("opacity", FLICKER_FULL_OPACITY);
        }));

        let restore_tick = restore.clone();
        let mut rng = StdRng::from_entropy();
        timers.push(Interval::start(cfg.flicker_check_ms, move || {
            if !chance.roll(&mut rng) {
                return;
            }
            _ = el.style().set_property("opacity", FLICKER_DIM_OPACITY);
            if let Err(e) = restore_tick.schedule(hold_ms) {
                log::warn!("[flicker] restore not scheduled: {:?}", e);
                _ = el.style().set_property("opacity", FLICKER_FULL_OPACITY);
            }
        })?);
        restores.push(restore);
    }
    Ok(Some(FlickerUnit {
        _timers: timers,
        _restores: restores,
    }))
}
