//! Tag layout engine.
//!
//! Three pure pieces, composed by [`compute_sheet_layout`]:
//! - grid: how many tags fit on the sheet
//! - width: per-character width estimate of the name
//! - font_size: largest name font that fits the text column

pub mod font_size;
pub mod grid;
pub mod width;

pub use font_size::{name_font_size_mm, solve_font_size};
pub use grid::{cell_origin, compute_grid, MAX_GRID_AXIS};
pub use width::{classify_char, estimate_width_units, CharClass};

use crate::types::{FontSizeBounds, SheetGeometry, SheetLayout, TagInstance};

/// Lay out a full sheet for `name`.
///
/// `name` is expected to be sanitized already (see [`crate::form::sanitize`]).
/// Tags are placed row-major; every tag gets the same font size.
pub fn compute_sheet_layout(
    name: &str,
    geometry: &SheetGeometry,
    bounds: &FontSizeBounds,
) -> SheetLayout {
    let grid = compute_grid(geometry);
    let name_width_units = estimate_width_units(name);
    let name_font_size_mm = solve_font_size(name_width_units, geometry.text_max_width_mm, bounds);

    tracing::debug!(
        columns = grid.columns,
        rows = grid.rows,
        width_units = name_width_units,
        font_size_mm = name_font_size_mm,
        "computed sheet layout"
    );

    let mut tags = Vec::with_capacity(grid.tag_count as usize);
    for row in 0..grid.rows {
        for column in 0..grid.columns {
            let (x_mm, y_mm) = cell_origin(geometry, column, row);
            tags.push(TagInstance {
                index: row * grid.columns + column,
                column,
                row,
                x_mm,
                y_mm,
                font_size_mm: name_font_size_mm,
            });
        }
    }

    SheetLayout {
        columns: grid.columns,
        rows: grid.rows,
        tag_count: grid.tag_count,
        name_font_size_mm,
        name_width_units,
        tags,
    }
}
