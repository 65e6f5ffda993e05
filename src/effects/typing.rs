use crate::dom;
use crate::timers::Deferred;
use doug_core::constants::SEL_TYPING_TEXT;
use doug_core::{EffectsConfig, TypingReveal};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pending reveal steps for the tagline. Dropping it stops the reveal where
/// it is.
pub struct TypingTask {
    step: Rc<RefCell<Option<Deferred>>>,
    reveal: Rc<RefCell<TypingReveal>>,
}

impl TypingTask {
    pub fn revealed(&self) -> usize {
        self.reveal.borrow().cursor()
    }

    pub fn is_running(&self) -> bool {
        self.step.borrow().as_ref().is_some_and(|d| d.is_pending())
    }
}

impl Drop for TypingTask {
    fn drop(&mut self) {
        self.step.borrow_mut().take();
    }
}

pub fn install(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<Option<TypingTask>> {
    let Some(el) = dom::query_one(document, SEL_TYPING_TEXT) else {
        return Ok(None);
    };
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));

    let reveal = Rc::new(RefCell::new(TypingReveal::new(&text)));
    let step: Rc<RefCell<Option<Deferred>>> = Rc::new(RefCell::new(None));
    let (start_ms, step_ms) = (cfg.typing_start_delay_ms, cfg.typing_step_ms);
    let first = reveal.borrow().next_delay_ms(start_ms, step_ms);
    let Some(first_ms) = first else {
        return Ok(Some(TypingTask { step, reveal }));
    };

    let step_next = Rc::downgrade(&step);
    let reveal_step = reveal.clone();
    let deferred = Deferred::new(move || {
        let next_ms = {
            let mut r = reveal_step.borrow_mut();
            if r.next_char().is_none() {
                return;
            }
            el.set_text_content(Some(&r.visible()));
            r.next_delay_ms(start_ms, step_ms)
        };
        let Some(next_ms) = next_ms else {
            return;
        };
        if let Some(slot) = step_next.upgrade() {
            if let Some(d) = slot.borrow().as_ref() {
                if let Err(e) = d.schedule(next_ms) {
                    log::warn!("[typing] stopped early: {:?}", e);
                }
            }
        }
    });
    deferred.schedule(first_ms)?;
    *step.borrow_mut() = Some(deferred);
    log::debug!("[typing] revealing {} chars", reveal.borrow().len());
    Ok(Some(TypingTask { step, reveal }))
}
