//! Synthesis request and options.

use pagekit_catalog::context::DEFAULT_APP_NAME;
use pagekit_core::DesignContext;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One synthesis call, as supplied by a caller.
///
/// Archetype and target are kept as raw names; the [`Synthesizer`]
/// resolves them according to its [`FallbackPolicy`].
///
/// [`Synthesizer`]: crate::Synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub archetype: String,
    pub target: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_app_name", alias = "applicationName")]
    pub app_name: String,
    #[serde(default, alias = "designContext")]
    pub design: DesignContext,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

impl SynthesisRequest {
    /// Create a light-mode request with the default application name and design.
    pub fn new(archetype: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            archetype: archetype.into(),
            target: target.into(),
            dark_mode: false,
            app_name: default_app_name(),
            design: DesignContext::default(),
        }
    }

    /// Decode a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enable or disable dark mode.
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Set the application name.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the design context.
    pub fn with_design(mut self, design: DesignContext) -> Self {
        self.design = design;
        self
    }
}

/// How unrecognized archetype and target names are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Unknown archetypes get the placeholder body and unknown targets the
    /// React assembler.
    #[default]
    Lenient,
    /// Unknown names are reported as errors.
    Strict,
}

/// Options for a [`Synthesizer`](crate::Synthesizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    pub fallback: FallbackPolicy,
    /// Emit TypeScript flavored files where the target offers a choice.
    pub typescript: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::Lenient,
            typescript: true,
        }
    }
}

impl SynthesisOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback policy.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Choose between TypeScript and plain JavaScript flavored files.
    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_json() {
        let request =
            SynthesisRequest::from_json(r#"{"archetype": "pricing", "target": "html"}"#).unwrap();
        assert_eq!(request, SynthesisRequest::new("pricing", "html"));
        assert_eq!(request.app_name, "My App");
    }

    #[test]
    fn test_request_full_json() {
        let request = SynthesisRequest::from_json(
            r##"{
                "archetype": "auth_login",
                "target": "vue",
                "darkMode": true,
                "applicationName": "Acme",
                "designContext": {"colorPalette": {"primary": "#000000"}}
            }"##,
        )
        .unwrap();
        assert!(request.dark_mode);
        assert_eq!(request.app_name, "Acme");
        assert_eq!(request.design.color_palette.primary, "#000000");
    }

    #[test]
    fn test_request_missing_target_is_error() {
        assert!(SynthesisRequest::from_json(r#"{"archetype": "landing"}"#).is_err());
    }

    #[test]
    fn test_options_builders() {
        let options = SynthesisOptions::new()
            .with_fallback(FallbackPolicy::Strict)
            .with_typescript(false);
        assert_eq!(options.fallback, FallbackPolicy::Strict);
        assert!(!options.typescript);
    }
}
