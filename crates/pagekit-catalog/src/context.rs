//! Inputs shared by every body producer.

/// Placeholder application name used when the caller supplies none.
pub const DEFAULT_APP_NAME: &str = "My App";

/// Parameters a body producer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyContext {
    /// Interpolated verbatim wherever branding appears.
    pub app_name: String,
    /// Whether dark-mode class fragments are appended.
    pub dark_mode: bool,
}

impl BodyContext {
    /// Create a new context.
    pub fn new(app_name: impl Into<String>, dark_mode: bool) -> Self {
        Self {
            app_name: app_name.into(),
            dark_mode,
        }
    }

    /// Class list for an element with a dark-mode variant.
    ///
    /// In dark mode the `dark` fragment is appended after a single space;
    /// otherwise `base` is returned unchanged. Every token in `dark` must carry
    /// the `dark:` prefix so the two modes differ only by those tokens.
    pub fn cls(&self, base: &str, dark: &str) -> String {
        debug_assert!(dark.split_whitespace().all(|t| t.starts_with("dark:")));
        if self.dark_mode {
            format!("{base} {dark}")
        } else {
            base.to_string()
        }
    }
}

impl Default for BodyContext {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cls_appends_only_in_dark_mode() {
        let light = BodyContext::new("Acme", false);
        let dark = BodyContext::new("Acme", true);
        assert_eq!(light.cls("bg-white", "dark:bg-gray-900"), "bg-white");
        assert_eq!(
            dark.cls("bg-white", "dark:bg-gray-900"),
            "bg-white dark:bg-gray-900"
        );
    }
}
