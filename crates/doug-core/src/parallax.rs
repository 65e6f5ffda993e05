use glam::Vec2;

/// Offset of the parallax target for a pointer position.
///
/// The target drifts away from the pointer: a pointer left of center pushes
/// it right. Center of the viewport maps to zero.
#[inline]
pub fn offset(pointer: Vec2, viewport: Vec2, divisor: f32) -> Vec2 {
    if divisor == 0.0 {
        return Vec2::ZERO;
    }
    (viewport * 0.5 - pointer) / divisor
}

/// CSS transform keeping the element centered on its anchor plus `offset`.
pub fn transform_css(offset: Vec2) -> String {
    format!(
        "translate(calc(-50% + {}px), calc(-50% + {}px))",
        offset.x, offset.y
    )
}
