//! Sheet colors and the document-level SVG pieces (root tag, style block).

use crate::form::TagForm;

use super::styles::{FontSizes, FontWeights};
use super::utils::{escape_xml, fmt_num};

/// Sheet color configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetColors {
    /// Sheet background
    pub bg: String,
    /// Tag text
    pub fg: String,
    /// Dark QR modules
    pub qr: String,
}

impl Default for SheetColors {
    fn default() -> Self {
        Self {
            bg: "#FFFFFF".to_string(),
            fg: crate::form::DEFAULT_TEXT_COLOR.to_string(),
            qr: crate::form::DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

impl SheetColors {
    /// Colors for a validated form: text as chosen, QR in the same color.
    pub fn from_form(form: &TagForm) -> Self {
        let fg = if form.text_color.is_empty() {
            crate::form::DEFAULT_TEXT_COLOR.to_string()
        } else {
            form.text_color.clone()
        };
        Self {
            fg,
            qr: form.qr_color().to_string(),
            ..Default::default()
        }
    }
}

/// Build the <style> block for tag text.
pub fn build_style_block(font_css: &str) -> String {
    format!(
        r#"<style>
  text {{ font-family: {}; }}
  .tag-name {{ font-weight: {}; }}
  .tag-label {{ font-size: {}px; font-weight: {}; }}
  .tag-via {{ font-size: {}px; font-weight: {}; }}
</style>"#,
        escape_xml(font_css),
        FontWeights::NAME,
        FontSizes::LABEL,
        FontWeights::LABEL,
        FontSizes::VIA,
        FontWeights::VIA,
    )
}

/// Build the SVG opening tag. Physical size in mm, one user unit per mm.
pub fn svg_open_tag(
    width_mm: f64,
    height_mm: f64,
    colors: &SheetColors,
    transparent: bool,
) -> String {
    let w = fmt_num(width_mm);
    let h = fmt_num(height_mm);
    let style = if transparent {
        String::new()
    } else {
        format!(r#" style="background:{}""#, escape_xml(&colors.bg))
    };
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}mm" height="{h}mm"{style}>"#,
        w = w,
        h = h,
        style = style
    )
}
