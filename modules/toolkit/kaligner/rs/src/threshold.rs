/// Minimal score to keep: the larger of the absolute minimum and the given fraction of the top
/// score, truncated to an integer.
#[inline(always)]
pub(crate) fn threshold(absolute: i32, relative: f64, top: i32) -> i32 {
    (absolute as f64).max(relative * top as f64) as i32
}

/// True if the score reaches both the absolute minimum and the given fraction of the top score.
#[inline(always)]
pub(crate) fn passes(score: i32, absolute: i32, relative: f64, top: i32) -> bool {
    score >= threshold(absolute, relative, top)
}
