//! Fixed tag content and styling constants.
//!
//! All sizes are in millimetres; the SVG user unit is 1mm.

/// Fixed text printed under the name
pub const TAG_LABEL: &str = "連絡先はこちら";
/// Credit line at the bottom of the text column
pub const TAG_VIA: &str = "via #ReturnMeTags!";

/// Font sizes of the fixed lines (mm). The name size is solved per sheet.
pub struct FontSizes;

impl FontSizes {
    pub const LABEL: f64 = 1.6;
    pub const VIA: f64 = 1.1;
}

/// Font weights used per element type
pub struct FontWeights;

impl FontWeights {
    pub const NAME: u32 = 700;
    pub const LABEL: u32 = 500;
    pub const VIA: u32 = 400;
}

/// Placement inside a tag, relative to its top-left corner
pub struct TagBox;

impl TagBox {
    /// Inset of the text column and QR code from the tag edge
    pub const PADDING: f64 = 1.0;
    /// Edge length of the square QR code
    pub const QR_SIZE: f64 = 11.0;
    /// Baselines as a fraction of the tag height
    pub const NAME_BASELINE: f64 = 0.42;
    pub const LABEL_BASELINE: f64 = 0.68;
    pub const VIA_BASELINE: f64 = 0.88;
}

/// Stroke widths (mm)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const CUT_GUIDE: f64 = 0.1;
}

pub const CUT_GUIDE_COLOR: &str = "#D1D5DB";
pub const CUT_GUIDE_DASH: &str = "0.8 0.6";
