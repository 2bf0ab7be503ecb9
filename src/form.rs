//! Form input handling: the caller side of the layout engine.
//!
//! Raw input is capped, trimmed and resolved into a [`TagForm`] before any
//! layout happens.

use crate::error::{Error, Result};
use crate::layout::width::is_whitespace;
use crate::types::MAX_NAME_CHARS;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref RE_HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

pub const DEFAULT_TEXT_COLOR: &str = "#000000";
/// QR foreground used when no text color is set
pub const FALLBACK_QR_COLOR: &str = "#111827";
/// Used in file names when the name is blank
pub const NO_NAME: &str = "no-name";

/// A selectable name font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub label: &'static str,
    /// CSS font-family stack
    pub css: &'static str,
}

pub static FONT_OPTIONS: [FontOption; 4] = [
    FontOption {
        label: "Noto Serif JP",
        css: "'Noto Serif JP', serif",
    },
    FontOption {
        label: "Noto Sans JP",
        css: "'Noto Sans JP', 'Helvetica Neue', Arial, sans-serif",
    },
    FontOption {
        label: "さわらび明朝",
        css: "'Sawarabi Mincho', 'Hiragino Mincho ProN', serif",
    },
    FontOption {
        label: "メイリオ",
        css: "'Meiryo Web', 'Meiryo', 'Hiragino Kaku Gothic ProN', 'MS PGothic', sans-serif",
    },
];

/// Look up a font by label. Unknown labels fall back to the first option.
pub fn find_font(label: &str) -> &'static FontOption {
    FONT_OPTIONS
        .iter()
        .find(|option| option.label == label)
        .unwrap_or(&FONT_OPTIONS[0])
}

/// Form fields exactly as the user typed them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawForm {
    pub name: String,
    pub contact_url: String,
    pub text_color: String,
    pub font_family: String,
}

impl Default for RawForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact_url: String::new(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_family: FONT_OPTIONS[0].label.to_string(),
        }
    }
}

/// Validated form, ready for layout and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
    pub contact_url: String,
    pub text_color: String,
    pub font: &'static FontOption,
}

impl TagForm {
    /// Color for the QR modules; the text color unless it is empty.
    pub fn qr_color(&self) -> &str {
        if self.text_color.is_empty() {
            FALLBACK_QR_COLOR
        } else {
            &self.text_color
        }
    }
}

/// Cut `name` to at most [`MAX_NAME_CHARS`] characters.
pub fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(MAX_NAME_CHARS) {
        Some((byte_idx, _)) => &name[..byte_idx],
        None => name,
    }
}

/// Name as displayed on the tag: capped first, then trimmed.
pub fn display_name(name: &str) -> &str {
    truncate_name(name).trim_matches(is_whitespace)
}

pub fn is_valid_color(value: &str) -> bool {
    RE_HEX_COLOR.is_match(value)
}

/// Validate raw input into a [`TagForm`].
pub fn sanitize(form: &RawForm) -> Result<TagForm> {
    let name = display_name(&form.name);
    if name.is_empty() {
        return Err(Error::MissingField { field: "name" });
    }
    let contact_url = form.contact_url.trim_matches(is_whitespace);
    if contact_url.is_empty() {
        return Err(Error::MissingField {
            field: "contact_url",
        });
    }

    let text_color = form.text_color.trim_matches(is_whitespace);
    if !text_color.is_empty() && !is_valid_color(text_color) {
        return Err(Error::InvalidColor {
            value: form.text_color.clone(),
        });
    }

    let font = find_font(&form.font_family);
    if font.label != form.font_family {
        tracing::warn!(
            requested = %form.font_family,
            using = font.label,
            "unknown font, using default"
        );
    }

    Ok(TagForm {
        name: name.to_string(),
        contact_url: contact_url.to_string(),
        text_color: text_color.to_string(),
        font,
    })
}

/// Download file name for a sheet, e.g. `maigo-tag-佐藤花子.svg`.
pub fn safe_file_name(name: &str, extension: &str) -> String {
    let name = display_name(name);
    let stem: String = if name.is_empty() {
        NO_NAME.to_string()
    } else {
        name.chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    };
    format!("maigo-tag-{}.{}", stem, extension)
}
