/// Selector for an in-page anchor's target, if the href points anywhere.
///
/// A bare `#` has no target and yields `None`.
#[inline]
pub fn fragment_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}
