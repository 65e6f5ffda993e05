#![cfg(target_arch = "wasm32")]
use doug_core::EffectsConfig;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod dom;
pub mod effects;
pub mod storage;
pub mod timers;

static BOOTED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static EFFECTS: RefCell<Option<effects::Effects>> = const { RefCell::new(None) };
    static READY: RefCell<Option<dom::Listener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let ready = dom::Listener::new(&document, "DOMContentLoaded", |_: web::Event| boot())
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        READY.with(|slot| *slot.borrow_mut() = Some(ready));
    } else {
        boot();
    }
    Ok(())
}

/// Installs every effect unit. Runs at most once until `teardown`; after
/// that `restart` can install them again.
fn boot() {
    if BOOTED.swap(true, Ordering::SeqCst) {
        log::warn!("[boot] effects already running; ignoring second start");
        return;
    }
    log::info!("doug-effects starting");
    match effects::Effects::install(&EffectsConfig::default()) {
        Ok(fx) => EFFECTS.with(|slot| *slot.borrow_mut() = Some(fx)),
        Err(e) => log::error!("[boot] init error: {:?}", e),
    }
}

/// Detaches every listener and stops every timer the effects installed.
#[wasm_bindgen]
pub fn teardown() {
    let fx = EFFECTS.with(|slot| slot.borrow_mut().take());
    drop(fx);
    READY.with(|slot| slot.borrow_mut().take());
    BOOTED.store(false, Ordering::SeqCst);
    log::info!("[boot] effects torn down");
}

/// Installs the effects again after `teardown`. A no-op while they run.
#[wasm_bindgen]
pub fn restart() {
    boot();
}
