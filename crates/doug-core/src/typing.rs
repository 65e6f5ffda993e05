/// Character-by-character reveal of a captured text.
///
/// The cursor only moves forward; once every character has been handed out
/// `next_char` keeps returning `None`.
#[derive(Clone, Debug)]
pub struct TypingReveal {
    chars: Vec<char>,
    cursor: usize,
}

impl TypingReveal {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Advance by one character and return it.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(c)
    }

    /// Delay before the next character goes on screen: the start delay for
    /// the first one, one step after that, `None` once everything is shown.
    pub fn next_delay_ms(&self, start_delay_ms: u32, step_ms: u32) -> Option<u32> {
        if self.is_done() {
            None
        } else if self.cursor == 0 {
            Some(start_delay_ms)
        } else {
            Some(step_ms)
        }
    }

    /// Text revealed so far.
    pub fn visible(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }
}

/// Number of characters on screen `elapsed_ms` after the reveal was set up.
///
/// The first character lands at `start_delay_ms`, then one more every
/// `step_ms`.
#[inline]
pub fn visible_after(elapsed_ms: u64, len: usize, start_delay_ms: u32, step_ms: u32) -> usize {
    let start = u64::from(start_delay_ms);
    if elapsed_ms < start || len == 0 {
        return 0;
    }
    let steps = (elapsed_ms - start) / u64::from(step_ms.max(1));
    let shown = usize::try_from(steps.saturating_add(1)).unwrap_or(usize::MAX);
    shown.min(len)
}
