//! Font-size solver - the largest name font that fits the text column.

use super::width::estimate_width_units;
use crate::types::{FontSizeBounds, SheetGeometry};

/// Map estimated width units to a font size (mm) within `bounds`.
///
/// Zero width (empty name) means nothing to fit, so the maximum is returned.
/// The result never increases as `width_units` grows.
pub fn solve_font_size(width_units: f64, text_max_width_mm: f64, bounds: &FontSizeBounds) -> f64 {
    if width_units.is_nan() || width_units <= 0.0 {
        return bounds.max_mm;
    }
    let candidate = text_max_width_mm / width_units;
    if candidate.is_nan() {
        return bounds.min_mm;
    }
    bounds.min_mm.max(bounds.max_mm.min(candidate))
}

/// Font size for `name` on tags of the given geometry.
pub fn name_font_size_mm(name: &str, geometry: &SheetGeometry, bounds: &FontSizeBounds) -> f64 {
    solve_font_size(estimate_width_units(name), geometry.text_max_width_mm, bounds)
}
