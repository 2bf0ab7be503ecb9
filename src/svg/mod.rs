//! SVG renderer - turns a laid-out tag sheet into an SVG document.
//!
//! One user unit is one millimetre, so the output prints at true size.
//! Pure string building, no DOM manipulation.

mod qr;
mod renderer;
mod styles;
mod theme;
mod utils;

pub use qr::QrMatrix;
pub use renderer::render_sheet_svg;
pub use styles::{TAG_LABEL, TAG_VIA};
pub use theme::SheetColors;
pub use utils::escape_xml;
