//! QR code for the contact URL, emitted once as an SVG definition and
//! referenced from every tag.

use qrcode::{Color, EcLevel, QrCode};

use super::utils::{escape_xml, fmt_num};
use crate::error::{Error, Result};

pub const QR_DEF_ID: &str = "contact-qr";

/// Encoded QR modules, row-major, `width * width` entries
#[derive(Debug, Clone)]
pub struct QrMatrix {
    pub width: usize,
    pub dark: Vec<bool>,
}

impl QrMatrix {
    /// Encode `data` at error-correction level M.
    pub fn encode(data: &str) -> Result<Self> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M).map_err(|e| {
            Error::QrEncode {
                message: e.to_string(),
            }
        })?;
        let width = code.width();
        let dark = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        tracing::trace!(width, bytes = data.len(), "encoded contact QR");
        Ok(Self { width, dark })
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.dark.get(y * self.width + x).copied().unwrap_or(false)
    }
}

/// Path data with one unit square per dark module; horizontal runs are merged.
fn module_path(matrix: &QrMatrix) -> String {
    let mut d = String::new();
    for y in 0..matrix.width {
        let mut x = 0;
        while x < matrix.width {
            if !matrix.is_dark(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < matrix.width && matrix.is_dark(x, y) {
                x += 1;
            }
            d.push_str(&format!("M{},{}h{}v1h-{}z", start, y, x - start, x - start));
        }
    }
    d
}

/// `<g id="contact-qr">` scaled to `size_mm`, no quiet zone, white backing.
pub fn qr_definition(matrix: &QrMatrix, size_mm: f64, color: &str) -> String {
    let scale = if matrix.width == 0 {
        1.0
    } else {
        size_mm / matrix.width as f64
    };
    format!(
        r##"  <g id="{id}" transform="scale({scale})">
    <rect width="{w}" height="{w}" fill="#FFFFFF" />
    <path d="{d}" fill="{color}" shape-rendering="crispEdges" />
  </g>"##,
        id = QR_DEF_ID,
        scale = fmt_num(scale),
        w = matrix.width,
        d = module_path(matrix),
        color = escape_xml(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_url() {
        let matrix = QrMatrix::encode("https://example.com/contact").unwrap();
        assert!(matrix.width >= 21);
        assert_eq!((matrix.width - 17) % 4, 0);
        assert_eq!(matrix.dark.len(), matrix.width * matrix.width);
        // finder pattern corner
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(6, 6));
        assert!(!matrix.is_dark(7, 7));
    }

    #[test]
    fn test_encode_too_long() {
        let data = "x".repeat(5000);
        assert!(matches!(QrMatrix::encode(&data), Err(Error::QrEncode { .. })));
    }

    #[test]
    fn test_definition_keeps_white_backing() {
        let matrix = QrMatrix {
            width: 2,
            dark: vec![true, false, false, true],
        };
        let def = qr_definition(&matrix, 11.0, "#ff0000");
        assert!(def.starts_with(r#"  <g id="contact-qr" transform="scale(5.5)">"#));
        assert!(def.contains(r##"<rect width="2" height="2" fill="#FFFFFF" />"##));
        assert!(def.contains(r##"<path d="M0,0h1v1h-1zM1,1h1v1h-1z" fill="#ff0000" "##));
        assert!(def.ends_with("</g>"));
    }

    #[test]
    fn test_module_path_merges_runs() {
        let matrix = QrMatrix {
            width: 3,
            dark: vec![true, true, false, false, false, false, false, false, true],
        };
        assert_eq!(module_path(&matrix), "M0,0h2v1h-2zM2,2h1v1h-1z");
    }
}
