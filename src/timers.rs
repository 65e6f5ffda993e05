use anyhow::anyhow;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
fn ms(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// A running `setInterval`. Dropping it stops the timer.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, tick: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms(period_ms),
            )
            .map_err(|e| anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// A reusable one-shot callback. At most one run is pending at a time:
/// scheduling again replaces the pending run. Dropping cancels it.
pub struct Deferred {
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl Deferred {
    pub fn new(mut run: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            run();
        }) as Box<dyn FnMut()>);
        Self { pending, callback }
    }

    pub fn schedule(&self, delay_ms: u32) -> anyhow::Result<()> {
        let window = window()?;
        self.cancel();
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                ms(delay_ms),
            )
            .map_err(|e| anyhow!("setTimeout: {:?}", e))?;
        self.pending.set(Some(id));
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        self.cancel();
    }
}
