//! Page effect units. Each `install` looks up its own elements and returns
//! `Ok(None)` when they are not on the page.

use crate::dom;
use anyhow::anyhow;
use doug_core::EffectsConfig;

pub mod banner;
pub mod flicker;
pub mod glitch;
pub mod nav;
pub mod parallax;
pub mod reading;
pub mod scroll;
pub mod typing;

/// Everything installed by one boot. Dropping it detaches all listeners
/// and stops all timers.
pub struct Effects {
    typing: Option<typing::TypingTask>,
    glitch: Option<glitch::GlitchUnit>,
    parallax: Option<parallax::ParallaxUnit>,
    scroll: Option<scroll::ScrollUnit>,
    flicker: Option<flicker::FlickerUnit>,
    nav: Option<nav::NavMenu>,
    reading: Option<reading::ReadingSettings>,
}

impl Effects {
    pub fn install(cfg: &EffectsConfig) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        banner::print();

        let store = std::rc::Rc::new(std::cell::RefCell::new(crate::storage::PageStore::open()));
        let fx = Self {
            typing: wired("typing", typing::install(&document, cfg)),
            glitch: wired("glitch", glitch::install(&document, cfg)),
            parallax: wired("parallax", parallax::install(&document, cfg)),
            scroll: wired("scroll", scroll::install(&document)),
            flicker: wired("flicker", flicker::install(&document, cfg)),
            nav: wired("nav", nav::install(&document)),
            reading: wired("reading", reading::install(&document, store)),
        };
        log::info!("[boot] {} effect units active", fx.active_units());
        Ok(fx)
    }

    pub fn active_units(&self) -> usize {
        [
            self.typing.is_some(),
            self.glitch.is_some(),
            self.parallax.is_some(),
            self.scroll.is_some(),
            self.flicker.is_some(),
            self.nav.is_some(),
            self.reading.is_some(),
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }
}

fn wired<T>(unit: &str, result: anyhow::Result<Option<T>>) -> Option<T> {
    match result {
        Ok(Some(u)) => {
            log::debug!("[{}] installed", unit);
            Some(u)
        }
        Ok(None) => {
            log::debug!("[{}] elements absent; skipped", unit);
            None
        }
        Err(e) => {
            log::error!("[{}] wiring failed: {:?}", unit, e);
            None
        }
    }
}
