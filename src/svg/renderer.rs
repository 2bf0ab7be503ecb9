//! SVG renderer - converts a SheetLayout into an SVG string.
//!
//! Pure string building, no DOM manipulation.
//! Renders back-to-front: background → cut guides → text → QR codes.

use super::qr::{qr_definition, QrMatrix, QR_DEF_ID};
use super::styles::{StrokeWidths, TagBox, CUT_GUIDE_COLOR, CUT_GUIDE_DASH, TAG_LABEL, TAG_VIA};
use super::theme::{build_style_block, svg_open_tag, SheetColors};
use super::utils::{escape_xml, fmt_num};
use crate::error::Result;
use crate::form::TagForm;
use crate::types::{SheetGeometry, SheetLayout, TagInstance};

/// Render a laid-out sheet as an SVG string.
pub fn render_sheet_svg(
    form: &TagForm,
    layout: &SheetLayout,
    geometry: &SheetGeometry,
    transparent: bool,
) -> Result<String> {
    let colors = SheetColors::from_form(form);
    let qr = QrMatrix::encode(&form.contact_url)?;
    let mut parts: Vec<String> = Vec::new();

    // SVG root + style block + the shared QR definition
    parts.push(svg_open_tag(
        geometry.sheet_width_mm,
        geometry.sheet_height_mm,
        &colors,
        transparent,
    ));
    parts.push(build_style_block(form.font.css));
    parts.push("<defs>".to_string());
    parts.push(qr_definition(&qr, TagBox::QR_SIZE, &colors.qr));
    parts.push("</defs>".to_string());

    if !transparent {
        parts.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" />"#,
            fmt_num(geometry.sheet_width_mm),
            fmt_num(geometry.sheet_height_mm),
            escape_xml(&colors.bg)
        ));
    }

    parts.push(format!(r#"<g class="tags" fill="{}">"#, escape_xml(&colors.fg)));
    for tag in &layout.tags {
        parts.push(render_tag(tag, &form.name, geometry));
    }
    parts.push("</g>".to_string());

    parts.push("</svg>".to_string());

    tracing::debug!(
        tags = layout.tags.len(),
        qr_modules = qr.width,
        font = form.font.label,
        "rendered sheet svg"
    );

    Ok(parts.join("\n"))
}

// ============================================================================
// Tag rendering
// ============================================================================

fn render_tag(tag: &TagInstance, name: &str, geometry: &SheetGeometry) -> String {
    let w = geometry.tag_width_mm;
    let h = geometry.tag_height_mm;
    let text_x = TagBox::PADDING;
    let qr_x = w - TagBox::PADDING - TagBox::QR_SIZE;
    let qr_y = (h - TagBox::QR_SIZE) / 2.0;

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(
        r#"<g class="tag" data-index="{}" transform="translate({} {})">"#,
        tag.index,
        fmt_num(tag.x_mm),
        fmt_num(tag.y_mm)
    ));

    // Cut guide
    parts.push(format!(
        r#"  <rect width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{}" />"#,
        fmt_num(w),
        fmt_num(h),
        CUT_GUIDE_COLOR,
        StrokeWidths::CUT_GUIDE,
        CUT_GUIDE_DASH
    ));

    parts.push(format!(
        r#"  <text class="tag-name" x="{}" y="{}" font-size="{}">{}</text>"#,
        fmt_num(text_x),
        fmt_num(h * TagBox::NAME_BASELINE),
        fmt_num(tag.font_size_mm),
        escape_xml(name)
    ));
    parts.push(format!(
        r#"  <text class="tag-label" x="{}" y="{}">{}</text>"#,
        fmt_num(text_x),
        fmt_num(h * TagBox::LABEL_BASELINE),
        TAG_LABEL
    ));
    parts.push(format!(
        r#"  <text class="tag-via" x="{}" y="{}">{}</text>"#,
        fmt_num(text_x),
        fmt_num(h * TagBox::VIA_BASELINE),
        TAG_VIA
    ));

    parts.push(format!(
        r##"  <use href="#{}" x="{}" y="{}" />"##,
        QR_DEF_ID,
        fmt_num(qr_x),
        fmt_num(qr_y)
    ));

    parts.push("</g>".to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{sanitize, RawForm};
    use crate::layout::compute_sheet_layout;
    use crate::types::FontSizeBounds;

    fn render(name: &str) -> String {
        let form = sanitize(&RawForm {
            name: name.to_string(),
            contact_url: "https://example.com/contact".to_string(),
            ..Default::default()
        })
        .unwrap();
        let geometry = SheetGeometry::default();
        let layout = compute_sheet_layout(&form.name, &geometry, &FontSizeBounds::default());
        render_sheet_svg(&form, &layout, &geometry, false).unwrap()
    }

    #[test]
    fn test_root_is_mm_sized() {
        let svg = render("Taro");
        let open = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 127 89" width="127mm" height="89mm""#;
        assert!(svg.starts_with(open));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_one_group_per_tag() {
        let svg = render("佐藤花子");
        assert_eq!(svg.matches(r#"<g class="tag" "#).count(), 20);
        assert_eq!(svg.matches(r#"font-size="3.5">佐藤花子</text>"#).count(), 20);
        assert_eq!(svg.matches(r##"<use href="#contact-qr""##).count(), 20);
    }

    #[test]
    fn test_qr_position_inside_tag() {
        let svg = render("Taro");
        // 30 - 1 - 11 = 18, (15 - 11) / 2 = 2
        assert!(svg.contains(r##"<use href="#contact-qr" x="18" y="2" />"##));
    }

    #[test]
    fn test_name_is_escaped() {
        let svg = render("<Tom & Ann>");
        assert!(svg.contains("&lt;Tom &amp; Ann&gt;"));
        assert!(!svg.contains("<Tom"));
    }
}
