// Tuning values and DOM selectors shared by every effect unit.

// Typing reveal
pub const TYPING_START_DELAY_MS: u32 = 1000; // wait before the first character
pub const TYPING_STEP_MS: u32 = 50; // one character per step

// Glitch re-trigger
pub const GLITCH_CHECK_MS: u32 = 100;
pub const GLITCH_PROBABILITY: f64 = 0.05;

// Stat value flicker
pub const FLICKER_CHECK_MS: u32 = 200;
pub const FLICKER_PROBABILITY: f64 = 0.10;
pub const FLICKER_HOLD_MS: u32 = 50; // how long the dimmed opacity stays
pub const FLICKER_DIM_OPACITY: &str = "0.5";
pub const FLICKER_FULL_OPACITY: &str = "1";

// Parallax: pointer displacement (px) per 1px of portal translation
pub const PARALLAX_DIVISOR: f32 = 50.0;

// Selectors
pub const SEL_TYPING_TEXT: &str = ".typing-text";
pub const SEL_GLITCH: &str = ".glitch";
pub const SEL_PARALLAX_TARGET: &str = ".hell-portal";
pub const SEL_FRAGMENT_LINKS: &str = "a[href^=\"#\"]";
pub const SEL_STAT_VALUE: &str = ".stat-value";
pub const SEL_NAV_TOGGLE: &str = ".nav-toggle";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_NAV_OVERLAY: &str = ".nav-overlay";
pub const SEL_NAV_LINKS: &str = "a";
pub const SEL_STORY_TEXT: &str = ".story-text";
pub const SEL_READING_SETTINGS: &str = ".reading-settings";
pub const SEL_FONT_BUTTONS: &str = ".setting-btn[data-font]";
pub const SEL_SIZE_BUTTONS: &str = ".setting-btn[data-size]";

// Marker class toggled on active nav parts and chosen setting buttons
pub const ACTIVE_CLASS: &str = "active";

/// Every tunable the effect units read at boot.
///
/// There is no runtime configuration surface; the front-end takes
/// `EffectsConfig::default()` so the values stay in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub typing_start_delay_ms: u32,
    pub typing_step_ms: u32,
    pub glitch_check_ms: u32,
    pub glitch_probability: f64,
    pub flicker_check_ms: u32,
    pub flicker_probability: f64,
    pub flicker_hold_ms: u32,
    pub parallax_divisor: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_step_ms: TYPING_STEP_MS,
            glitch_check_ms: GLITCH_CHECK_MS,
            glitch_probability: GLITCH_PROBABILITY,
            flicker_check_ms: FLICKER_CHECK_MS,
            flicker_probability: FLICKER_PROBABILITY,
            flicker_hold_ms: FLICKER_HOLD_MS,
            parallax_divisor: PARALLAX_DIVISOR,
        }
    }
}
