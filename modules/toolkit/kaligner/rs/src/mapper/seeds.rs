use std::ops::Range;

use rand::Rng;

/// Seed positions inside the window: the window start, then random steps within
/// `[min_distance, max_distance]`, and always the last k-mer of the window. Windows shorter than
/// `k` have no seeds.
pub(crate) fn sample(
    window: Range<usize>,
    k: usize,
    (min_distance, max_distance): (usize, usize),
    rng: &mut impl Rng,
) -> Vec<usize> {
    if window.len() < k {
        return Vec::new();
    }
    let last = window.end - k;

    let mut seeds = Vec::with_capacity(window.len() / min_distance.max(1) + 2);
    seeds.push(window.start);
    let mut position = window.start;
    loop {
        position += rng.gen_range(min_distance..=max_distance);
        if position >= last {
            break;
        }
        seeds.push(position);
    }
    if seeds.last() != Some(&last) {
        seeds.push(last);
    }
    seeds
}
