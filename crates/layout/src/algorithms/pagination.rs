/// Tolerance for float noise when comparing accumulated heights.
pub const EPSILON: f32 = 1e-3;

/// Whether content of height `required` fits into `available` points.
///
/// An exact fit counts as fitting.
pub fn fits(required: f32, available: f32) -> bool {
    required <= available + EPSILON
}

/// Number of leading items from `heights` that fit into `available`, stacked.
pub fn leading_fit(heights: &[f32], available: f32) -> usize {
    let mut used = 0.0;
    heights
        .iter()
        .take_while(|h| {
            let fit = fits(used + **h, available);
            if fit {
                used += **h;
            }
            fit
        })
        .count()
}
