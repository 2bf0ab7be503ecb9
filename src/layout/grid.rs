//! Grid calculator - how many tags fit on a sheet and where each one goes.

use crate::types::{GridSize, SheetGeometry};

/// Upper bound on columns and rows. Keeps `columns * rows` and every tag
/// index well inside `u32` for absurdly small tag sizes.
pub const MAX_GRID_AXIS: u32 = 256;

/// Whole tags that fit along one axis. Degenerate input clamps to zero.
fn fit_count(sheet_mm: f64, margin_mm: f64, tag_mm: f64) -> u32 {
    if !(tag_mm.is_finite() && tag_mm > 0.0) || !(margin_mm.is_finite() && margin_mm >= 0.0) {
        return 0;
    }
    let usable = sheet_mm - 2.0 * margin_mm;
    if !(usable.is_finite() && usable > 0.0) {
        return 0;
    }
    let count = (usable / tag_mm).floor();
    if count.is_nan() {
        return 0;
    }
    count.min(MAX_GRID_AXIS as f64) as u32
}

/// Column/row counts for a geometry.
pub fn compute_grid(geometry: &SheetGeometry) -> GridSize {
    let columns = fit_count(geometry.sheet_width_mm, geometry.margin_mm, geometry.tag_width_mm);
    let rows = fit_count(geometry.sheet_height_mm, geometry.margin_mm, geometry.tag_height_mm);
    GridSize {
        columns,
        rows,
        tag_count: columns * rows,
    }
}

/// Top-left corner of the tag in cell (column, row).
pub fn cell_origin(geometry: &SheetGeometry, column: u32, row: u32) -> (f64, f64) {
    (
        geometry.margin_mm + column as f64 * geometry.tag_width_mm,
        geometry.margin_mm + row as f64 * geometry.tag_height_mm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sheet() {
        let grid = compute_grid(&SheetGeometry::default());
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.tag_count, 20);
    }

    #[test]
    fn test_margin_wider_than_sheet() {
        let geometry = SheetGeometry {
            margin_mm: 70.0,
            ..Default::default()
        };
        let grid = compute_grid(&geometry);
        assert_eq!(grid.columns, 0);
        assert_eq!(grid.rows, 0);
        assert_eq!(grid.tag_count, 0);
    }

    #[test]
    fn test_negative_margin_clamps() {
        let geometry = SheetGeometry {
            margin_mm: -5.0,
            ..Default::default()
        };
        assert_eq!(compute_grid(&geometry).tag_count, 0);
    }

    #[test]
    fn test_zero_tag_size() {
        let geometry = SheetGeometry {
            tag_width_mm: 0.0,
            ..Default::default()
        };
        let grid = compute_grid(&geometry);
        assert_eq!(grid.columns, 0);
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.tag_count, 0);
    }

    #[test]
    fn test_exact_fit() {
        let geometry = SheetGeometry {
            sheet_width_mm: 60.0,
            sheet_height_mm: 30.0,
            margin_mm: 0.0,
            ..Default::default()
        };
        let grid = compute_grid(&geometry);
        assert_eq!((grid.columns, grid.rows), (2, 2));
    }

    #[test]
    fn test_tiny_tags_clamp_per_axis() {
        let geometry = SheetGeometry {
            tag_width_mm: 0.0001,
            tag_height_mm: 0.0001,
            ..Default::default()
        };
        let grid = compute_grid(&geometry);
        assert_eq!(grid.columns, MAX_GRID_AXIS);
        assert_eq!(grid.rows, MAX_GRID_AXIS);
        assert_eq!(grid.tag_count, MAX_GRID_AXIS * MAX_GRID_AXIS);
    }

    #[test]
    fn test_infinite_sheet_clamps() {
        let geometry = SheetGeometry {
            sheet_width_mm: f64::INFINITY,
            ..Default::default()
        };
        let grid = compute_grid(&geometry);
        assert_eq!(grid.columns, 0);
        assert_eq!(grid.tag_count, 0);
    }

    #[test]
    fn test_cell_origin() {
        let geometry = SheetGeometry::default();
        assert_eq!(cell_origin(&geometry, 0, 0), (3.5, 3.5));
        assert_eq!(cell_origin(&geometry, 3, 4), (93.5, 63.5));
    }
}
