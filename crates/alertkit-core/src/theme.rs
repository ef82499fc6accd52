//! Alert chrome theme.
//!
//! Themes can be built in code or loaded from JSON whose color fields are hex
//! strings:
//!
//! ```json
//! { "kind": "dark", "accent": "#64D2FF", "destructive": "#FF453A", ... }
//! ```

use crate::types::Color;
#[cfg(feature = "serde")]
use crate::errors::ThemeError;

/// Whether the chrome is drawn on a light or dark backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

/// Colors used by the alert chrome and its content.
///
/// `disabled` colors action titles while the alert ignores input;
/// `highlighted_item` fills a pressed action.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTheme {
    pub kind: ThemeKind,
    pub background: Color,
    pub primary: Color,
    pub accent: Color,
    pub destructive: Color,
    pub disabled: Color,
    pub separator: Color,
    pub highlighted_item: Color,
}

impl AlertTheme {
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::from_rgb8(0xF9, 0xF9, 0xF9),
            primary: Color::BLACK,
            accent: Color::from_rgb8(0x00, 0x7A, 0xFF),
            destructive: Color::from_rgb8(0xFF, 0x3B, 0x30),
            disabled: Color::from_rgb8(0xD0, 0xD0, 0xD0),
            separator: Color::from_rgb8(0xC9, 0xC9, 0xC9),
            highlighted_item: Color::from_rgb8(0xE5, 0xE5, 0xE5),
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Color::from_rgb8(0x1C, 0x1C, 0x1D),
            primary: Color::WHITE,
            accent: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            destructive: Color::from_rgb8(0xEB, 0x55, 0x45),
            disabled: Color::from_rgb8(0x4D, 0x4D, 0x4D),
            separator: Color::from_rgb8(0x3D, 0x3D, 0x40),
            highlighted_item: Color::from_rgb8(0x31, 0x31, 0x32),
        }
    }
}

impl Default for AlertTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ThemeFile {
    #[serde(default)]
    kind: ThemeKind,
    background: String,
    primary: String,
    accent: String,
    destructive: String,
    disabled: String,
    separator: String,
    highlighted_item: String,
}

#[cfg(feature = "serde")]
impl AlertTheme {
    /// Parse a theme from JSON.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile =
            serde_json::from_str(source).map_err(|e| ThemeError::Json(e.to_string()))?;

        let color = |field: &str, value: &str| {
            Color::from_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                field: field.to_string(),
                value: value.to_string(),
            })
        };

        Ok(Self {
            kind: file.kind,
            background: color("background", &file.background)?,
            primary: color("primary", &file.primary)?,
            accent: color("accent", &file.accent)?,
            destructive: color("destructive", &file.destructive)?,
            disabled: color("disabled", &file.disabled)?,
            separator: color("separator", &file.separator)?,
            highlighted_item: color("highlighted_item", &file.highlighted_item)?,
        })
    }

    /// Serialize the theme to pretty JSON with hex colors.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        let file = ThemeFile {
            kind: self.kind,
            background: self.background.to_hex(),
            primary: self.primary.to_hex(),
            accent: self.accent.to_hex(),
            destructive: self.destructive.to_hex(),
            disabled: self.disabled.to_hex(),
            separator: self.separator.to_hex(),
            highlighted_item: self.highlighted_item.to_hex(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| ThemeError::Json(e.to_string()))
    }
}
