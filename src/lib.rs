//! tagsheet - printable sheets of name + QR contact tags
//!
//! Lays out identical tags on a sheet (an L-size photo print by default),
//! fits the name to the tag's text column with a per-character width
//! heuristic, and renders the sheet as SVG.
//!
//! # Example
//!
//! ```rust
//! use tagsheet::{compute_sheet_layout, FontSizeBounds, SheetGeometry};
//!
//! let layout = compute_sheet_layout("佐藤花子", &SheetGeometry::default(), &FontSizeBounds::default());
//! assert_eq!(layout.tag_count, 20);
//! assert_eq!(layout.name_font_size_mm, 3.5);
//! ```
//!
//! ```rust
//! use tagsheet::{render_to_svg, RawForm, TagSheetConfig};
//!
//! let form = RawForm {
//!     name: "山田太郎".to_string(),
//!     contact_url: "https://example.com/contact".to_string(),
//!     ..Default::default()
//! };
//! let svg = render_to_svg(&form, &TagSheetConfig::default()).unwrap();
//! assert!(svg.contains("山田太郎"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod layout;
pub mod svg;
pub mod types;

pub use error::{Error, Result};
pub use form::{sanitize, RawForm, TagForm};
pub use layout::{compute_sheet_layout, estimate_width_units, name_font_size_mm};
pub use types::*;

/// Validate a raw form, lay out the sheet and render it as SVG.
pub fn render_to_svg(form: &RawForm, config: &TagSheetConfig) -> Result<String> {
    let form = sanitize(form)?;
    let layout = compute_sheet_layout(&form.name, &config.geometry, &config.font_bounds);
    svg::render_sheet_svg(&form, &layout, &config.geometry, false)
}
