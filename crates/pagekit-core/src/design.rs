//! Design context supplied by the styling collaborator.

use serde::{Deserialize, Serialize};

/// Styling parameters for one synthesis call.
///
/// Only the standalone document target reads these values; every other
/// target accepts and ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignContext {
    pub color_palette: ColorPalette,
    pub typography: Typography,
}

impl DesignContext {
    /// Create a context from explicit palette and font values.
    pub fn new(
        primary: impl Into<String>,
        background: impl Into<String>,
        foreground: impl Into<String>,
        font_family: impl Into<String>,
    ) -> Self {
        Self {
            color_palette: ColorPalette {
                primary: primary.into(),
                background: background.into(),
                foreground: foreground.into(),
            },
            typography: Typography {
                font_family: font_family.into(),
            },
        }
    }

    /// Copy of this context with every empty field replaced by its default.
    pub fn or_defaults(&self) -> Self {
        let palette = ColorPalette::default();
        let typography = Typography::default();
        let pick = |value: &str, fallback: String| {
            if value.trim().is_empty() {
                fallback
            } else {
                value.to_string()
            }
        };
        Self {
            color_palette: ColorPalette {
                primary: pick(&self.color_palette.primary, palette.primary),
                background: pick(&self.color_palette.background, palette.background),
                foreground: pick(&self.color_palette.foreground, palette.foreground),
            },
            typography: Typography {
                font_family: pick(&self.typography.font_family, typography.font_family),
            },
        }
    }
}

/// Brand colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: String,
    pub background: String,
    pub foreground: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#0f172a".to_string(),
        }
    }
}

/// Font settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub font_family: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Inter, system-ui, sans-serif".to_string(),
        }
    }
}

/// Source of the design context for a synthesis call.
pub trait DesignContextProvider {
    fn design_context(&self) -> DesignContext;
}

impl DesignContextProvider for DesignContext {
    fn design_context(&self) -> DesignContext {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_defaults_fills_blanks() {
        let ctx = DesignContext::new("#ff0000", "", "  ", "");
        let filled = ctx.or_defaults();
        assert_eq!(filled.color_palette.primary, "#ff0000");
        assert_eq!(filled.color_palette.background, "#ffffff");
        assert_eq!(filled.color_palette.foreground, "#0f172a");
        assert_eq!(filled.typography.font_family, "Inter, system-ui, sans-serif");
    }

    #[test]
    fn test_deserialize_partial() {
        let ctx: DesignContext =
            serde_json::from_str(r##"{"colorPalette": {"primary": "#111111"}}"##).unwrap();
        assert_eq!(ctx.color_palette.primary, "#111111");
        assert_eq!(ctx.color_palette.background, "#ffffff");
        assert_eq!(ctx.typography, Typography::default());
    }
}
