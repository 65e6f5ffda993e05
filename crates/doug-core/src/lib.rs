//! Platform-free logic behind the DOUG site effects.
//!
//! Nothing in here touches the DOM; the wasm front-end wires these pieces to
//! elements, timers and `localStorage`, and the host tests exercise them
//! directly.

pub mod banner;
pub mod chance;
pub mod constants;
pub mod nav;
pub mod parallax;
pub mod prefs;
pub mod scroll;
pub mod typing;

pub use chance::Chance;
pub use constants::EffectsConfig;
pub use nav::{NavMarkers, NavState, NavTrigger};
pub use prefs::{KeyValueStore, MemoryStore, PrefError, ReadingFont, ReadingPrefs, ReadingSize};
pub use typing::TypingReveal;
