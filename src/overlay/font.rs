//! Overlay font sizing.
//!
//! Overlay text has to fit boxes that range from a street-sign strip to a
//! full menu panel. The heuristic here starts from the box height and trims
//! for long text and narrow boxes.

/// Smallest font size the overlay will use.
pub const MIN_FONT_SIZE: f64 = 8.0;
/// Largest font size the overlay will use.
pub const MAX_FONT_SIZE: f64 = 20.0;

/// Computes a display font size for `text` rendered inside a box of
/// `box_width` x `box_height` view pixels.
///
/// The base size is 60% of the box height, clamped to `[8, 24]`; a length
/// factor in `[0.5, 1.2]` shrinks long text, and a width factor in
/// `[0.6, 1.5]` shrinks text in narrow boxes. The final size is clamped to
/// `[8, 20]` — the base intentionally clamps higher than the result so that
/// the factors can trade against each other before the hard cap.
///
/// Empty text is treated as length 1; the result lies in `[8, 20]` for all
/// non-degenerate inputs.
#[must_use]
pub fn optimal_font_size(text: &str, box_width: f64, box_height: f64) -> f64 {
    let n = text.chars().count().max(1) as f64;

    let base = (box_height * 0.6).clamp(MIN_FONT_SIZE, 24.0);
    let length_factor = (20.0 / n).clamp(0.5, 1.2);
    let width_factor = (box_width / (n * 8.0)).clamp(0.6, 1.5);

    (base * length_factor * width_factor).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
