//! Type definitions for tag sheets: geometry, font bounds and computed layouts

use serde::{Deserialize, Serialize};

/// Longest name (in chars) that fits on a tag. Longer input is cut by the form layer.
pub const MAX_NAME_CHARS: usize = 12;

/// Physical sheet and tag dimensions, all in millimetres.
///
/// Defaults describe an L-size photo print (127 x 89mm) holding 30 x 15mm tags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetGeometry {
    pub sheet_width_mm: f64,
    pub sheet_height_mm: f64,
    /// Blank border kept on every side of the sheet
    pub margin_mm: f64,
    pub tag_width_mm: f64,
    pub tag_height_mm: f64,
    /// Width of the text column next to the QR code
    pub text_max_width_mm: f64,
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self {
            sheet_width_mm: 127.0,
            sheet_height_mm: 89.0,
            margin_mm: 3.5,
            tag_width_mm: 30.0,
            tag_height_mm: 15.0,
            text_max_width_mm: 14.0,
        }
    }
}

/// Clamp range for the solved name font size (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizeBounds {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl Default for FontSizeBounds {
    fn default() -> Self {
        Self {
            min_mm: 1.1,
            max_mm: 4.0,
        }
    }
}

/// Everything configurable about a sheet, as loaded from a JSON config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagSheetConfig {
    pub geometry: SheetGeometry,
    pub font_bounds: FontSizeBounds,
}

/// Column and row counts of the tag grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
    pub tag_count: u32,
}

/// One placed tag. All tags on a sheet share content; only the position differs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInstance {
    /// Row-major position in the grid
    pub index: u32,
    pub column: u32,
    pub row: u32,
    /// Top-left corner on the sheet
    pub x_mm: f64,
    pub y_mm: f64,
    pub font_size_mm: f64,
}

/// Computed layout handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLayout {
    pub columns: u32,
    pub rows: u32,
    pub tag_count: u32,
    pub name_font_size_mm: f64,
    pub name_width_units: f64,
    pub tags: Vec<TagInstance>,
}
