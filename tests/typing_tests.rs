// Host-side tests for the typing reveal schedule.
// The main crate is wasm-only, so these exercise doug-core directly.

use doug_core::constants::{TYPING_START_DELAY_MS, TYPING_STEP_MS};
use doug_core::typing::visible_after;
use doug_core::TypingReveal;

fn shown(elapsed_ms: u64, len: usize) -> usize {
    visible_after(elapsed_ms, len, TYPING_START_DELAY_MS, TYPING_STEP_MS)
}

#[test]
fn nothing_visible_before_start_delay() {
    assert_eq!(shown(0, 10), 0);
    assert_eq!(shown(999, 10), 0);
    assert_eq!(shown(1000, 10), 1);
}

#[test]
fn full_text_visible_after_len_steps_plus_delay() {
    for len in [1usize, 2, 7, 40, 256] {
        let t = len as u64 * 50 + 1000;
        assert_eq!(shown(t, len), len, "len={len}");
        assert_eq!(shown(t + 10_000, len), len);
    }
}

#[test]
fn one_more_character_per_step() {
    let mut prev = 0;
    for t in (1000..=1500).step_by(50) {
        let now = shown(t, 100);
        assert_eq!(now, prev + 1, "t={t}");
        prev = now;
    }
    assert_eq!(shown(1049, 100), 1);
}

#[test]
fn empty_text_never_shows_anything() {
    assert_eq!(shown(5000, 0), 0);
    let mut r = TypingReveal::new("");
    assert!(r.is_done());
    assert_eq!(r.next_char(), None);
}

#[test]
fn reveal_hands_out_characters_in_order() {
    let mut r = TypingReveal::new("Hell Inc.");
    let mut out = String::new();
    while let Some(c) = r.next_char() {
        out.push(c);
        assert_eq!(r.visible(), out);
    }
    assert_eq!(out, "Hell Inc.");
    assert!(r.is_done());
    assert_eq!(r.cursor(), r.len());
    assert_eq!(r.next_char(), None);
    assert_eq!(r.cursor(), 9);
}

#[test]
fn reveal_counts_code_points_not_bytes() {
    let mut r = TypingReveal::new("◆ ok");
    assert_eq!(r.len(), 4);
    assert_eq!(r.next_char(), Some('◆'));
    assert_eq!(r.visible(), "◆");
}

#[test]
fn delay_chain_starts_late_then_steps() {
    let r = TypingReveal::new("abc");
    assert_eq!(r.next_delay_ms(1000, 50), Some(1000));

    let mut r = r;
    r.next_char();
    assert_eq!(r.next_delay_ms(1000, 50), Some(50));
    r.next_char();
    r.next_char();
    assert_eq!(r.next_delay_ms(1000, 50), None);
    assert_eq!(TypingReveal::new("").next_delay_ms(1000, 50), None);
}

#[test]
fn delay_chain_reveals_len_chars_by_len_steps_plus_delay() {
    // Walk the same chain the page follows and record when each char lands.
    for text in ["x", "Hell Inc.", "Your soul has been logged."] {
        let mut r = TypingReveal::new(text);
        let mut clock = 0u64;
        let mut landed = Vec::new();
        while let Some(delay) = r.next_delay_ms(TYPING_START_DELAY_MS, TYPING_STEP_MS) {
            clock += u64::from(delay);
            r.next_char();
            landed.push(clock);
        }
        let len = r.len();
        assert_eq!(r.visible(), text);
        assert_eq!(landed.len(), len);
        assert_eq!(landed[0], u64::from(TYPING_START_DELAY_MS));
        assert!(*landed.last().unwrap() <= len as u64 * 50 + 1000);
        for (i, t) in landed.iter().enumerate() {
            assert_eq!(shown(*t, len), i + 1, "text={text:?} i={i}");
            assert_eq!(shown(*t - 1, len), i, "text={text:?} i={i}");
        }
    }
}
