//! Reading preferences: font family and text size for the story body.
//!
//! Both axes are stored as plain strings under their own key. Anything
//! missing or unrecognized in storage falls back to the axis default.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const FONT_KEY: &str = "doug-reading-font";
pub const SIZE_KEY: &str = "doug-reading-size";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefError {
    #[error("unknown {axis} preference: {value:?}")]
    Unknown { axis: &'static str, value: String },
}

/// String key-value storage the preferences persist to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store; used when the browser refuses `localStorage` and by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReadingFont {
    #[default]
    Serif,
    Sans,
    Mono,
    Modern,
}

impl ReadingFont {
    pub const ALL: [ReadingFont; 4] = [Self::Serif, Self::Sans, Self::Mono, Self::Modern];
    pub const CLASSES: [&'static str; 4] = ["font-serif", "font-sans", "font-mono", "font-modern"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::Sans => "sans",
            Self::Mono => "mono",
            Self::Modern => "modern",
        }
    }

    pub fn css_class(self) -> &'static str {
        Self::CLASSES[self as usize]
    }
}

impl FromStr for ReadingFont {
    type Err = PrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PrefError::Unknown {
                axis: "font",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ReadingFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ReadingSize {
    pub const ALL: [ReadingSize; 3] = [Self::Small, Self::Medium, Self::Large];
    pub const CLASSES: [&'static str; 3] = ["size-small", "size-medium", "size-large"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn css_class(self) -> &'static str {
        Self::CLASSES[self as usize]
    }
}

impl FromStr for ReadingSize {
    type Err = PrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PrefError::Unknown {
                axis: "size",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ReadingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current font and size selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadingPrefs {
    pub font: ReadingFont,
    pub size: ReadingSize,
}

impl ReadingPrefs {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            font: load_axis(store, FONT_KEY),
            size: load_axis(store, SIZE_KEY),
        }
    }

    pub fn set_font(&mut self, store: &mut impl KeyValueStore, font: ReadingFont) {
        self.font = font;
        store.set(FONT_KEY, font.as_str());
    }

    pub fn set_size(&mut self, store: &mut impl KeyValueStore, size: ReadingSize) {
        self.size = size;
        store.set(SIZE_KEY, size.as_str());
    }
}

fn load_axis<T>(store: &impl KeyValueStore, key: &str) -> T
where
    T: FromStr<Err = PrefError> + Default,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("[reading] {} ({}); using default", e, key);
            T::default()
        }),
        None => T::default(),
    }
}
