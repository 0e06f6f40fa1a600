//! Viewport fitting and follow smoothing.

use crate::player::Range;

/// Center a window of `proposed`'s width on `playhead`, sliding it back inside `[0, 1]`
/// when it would spill over either edge. Width is always preserved.
#[inline]
pub fn fitted_viewport(playhead: f64, proposed: Range) -> Range {
    let width = proposed[1] - proposed[0];
    let left = playhead - width / 2.0;
    let right = playhead + width / 2.0;
    if left >= 0.0 && right <= 1.0 {
        [left, right]
    } else if left < 0.0 {
        [0.0, width]
    } else {
        [1.0 - width, 1.0]
    }
}

/// One step of exponential follow: keep `retain` of `current`, take the rest from `ideal`.
#[inline]
pub fn blend_viewport(current: Range, ideal: Range, retain: f64) -> Range {
    let take = 1.0 - retain;
    [
        current[0] * retain + ideal[0] * take,
        current[1] * retain + ideal[1] * take,
    ]
}

#[inline]
pub(crate) fn center(viewport: Range) -> f64 {
    (viewport[0] + viewport[1]) / 2.0
}
