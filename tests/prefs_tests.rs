// Host-side tests for reading preferences over an in-memory store.

use doug_core::prefs::{FONT_KEY, SIZE_KEY};
use doug_core::{KeyValueStore, MemoryStore, PrefError, ReadingFont, ReadingPrefs, ReadingSize};

#[test]
fn empty_store_gives_defaults() {
    let prefs = ReadingPrefs::load(&MemoryStore::new());
    assert_eq!(prefs.font, ReadingFont::Serif);
    assert_eq!(prefs.size, ReadingSize::Medium);
    assert_eq!(prefs.font.css_class(), "font-serif");
    assert_eq!(prefs.size.css_class(), "size-medium");
}

#[test]
fn setting_font_keeps_size() {
    let mut store = MemoryStore::new();
    store.set(SIZE_KEY, "large");
    let mut prefs = ReadingPrefs::load(&store);
    prefs.set_font(&mut store, ReadingFont::Mono);

    let reloaded = ReadingPrefs::load(&store);
    assert_eq!(reloaded.font, ReadingFont::Mono);
    assert_eq!(reloaded.size, ReadingSize::Large);
    assert_eq!(store.get(FONT_KEY).as_deref(), Some("mono"));
}

#[test]
fn setting_size_keeps_font() {
    let mut store = MemoryStore::new();
    let mut prefs = ReadingPrefs::load(&store);
    prefs.set_font(&mut store, ReadingFont::Modern);
    prefs.set_size(&mut store, ReadingSize::Small);
    prefs.set_size(&mut store, ReadingSize::Large);

    let reloaded = ReadingPrefs::load(&store);
    assert_eq!(reloaded.font, ReadingFont::Modern);
    assert_eq!(reloaded.size, ReadingSize::Large);
}

#[test]
fn unknown_stored_values_fall_back() {
    let mut store = MemoryStore::new();
    store.set(FONT_KEY, "comic");
    store.set(SIZE_KEY, "LARGE");
    assert_eq!(ReadingPrefs::load(&store), ReadingPrefs::default());
}

#[test]
fn parse_round_trips_every_value() {
    for f in ReadingFont::ALL {
        assert_eq!(f.as_str().parse::<ReadingFont>(), Ok(f));
        assert_eq!(f.css_class(), format!("font-{f}"));
    }
    for s in ReadingSize::ALL {
        assert_eq!(s.as_str().parse::<ReadingSize>(), Ok(s));
        assert_eq!(s.css_class(), format!("size-{s}"));
    }
}

#[test]
fn parse_error_names_axis_and_value() {
    let err = "huge".parse::<ReadingSize>().unwrap_err();
    assert_eq!(
        err,
        PrefError::Unknown {
            axis: "size",
            value: "huge".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown size preference: \"huge\"");
}

#[test]
fn class_families_are_disjoint() {
    for c in ReadingFont::CLASSES {
        assert!(!ReadingSize::CLASSES.contains(&c));
    }
}
