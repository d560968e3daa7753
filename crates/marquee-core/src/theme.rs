//! Theming - default palette and CSS custom-property generation
//!
//! The control tree renders stable BEM class names (`video`, `video-seek`,
//! `video-overlay`, ...) and takes its colors from CSS custom properties, so
//! a host can restyle the player by overriding variables or shipping its own
//! stylesheet. [`Theme::to_css`] emits a ready-to-inject default.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Color palette for the default stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Accent for the played portion of gauges and the play affordance
    pub accent: Cow<'static, str>,
    /// Shell background behind the video
    pub background: Cow<'static, str>,
    /// Buffered-range indicator
    pub buffer: Cow<'static, str>,
    /// Label and time-display text
    pub text: Cow<'static, str>,
    /// Overlay error message
    pub error: Cow<'static, str>,
    /// Control-bar backdrop
    pub control_bar: Cow<'static, str>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            accent: Cow::Borrowed("#e54b4b"),
            background: Cow::Borrowed("#000000"),
            buffer: Cow::Borrowed("rgba(255, 255, 255, 0.3)"),
            text: Cow::Borrowed("#ffffff"),
            error: Cow::Borrowed("#ff6b6b"),
            control_bar: Cow::Borrowed("rgba(0, 0, 0, 0.7)"),
        }
    }
}

/// Complete theme configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ThemeColors,
    /// Border radius in pixels for gauges and buttons
    pub border_radius: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            border_radius: 2,
        }
    }
}

impl Theme {
    /// CSS custom properties for this theme
    pub fn css_variables(&self) -> String {
        format!(
            r#":root {{
  --marquee-accent: {};
  --marquee-background: {};
  --marquee-buffer: {};
  --marquee-text: {};
  --marquee-error: {};
  --marquee-control-bar: {};
  --marquee-radius: {}px;
}}"#,
            self.colors.accent,
            self.colors.background,
            self.colors.buffer,
            self.colors.text,
            self.colors.error,
            self.colors.control_bar,
            self.border_radius,
        )
    }

    /// Baseline rules for the player's class vocabulary
    pub fn base_css() -> &'static str {
        r#"
.video {
  position: relative;
  background: var(--marquee-background);
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--marquee-text);
}

.video__el {
  display: block;
  width: 100%;
}

.video-controls {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  display: flex;
  align-items: center;
  background: var(--marquee-control-bar);
}

.video__control {
  background: transparent;
  border: none;
  color: var(--marquee-text);
  cursor: pointer;
}

.video__control--focused {
  outline: 2px solid var(--marquee-accent);
}

.video-seek__buffer-bar {
  background: var(--marquee-buffer);
  border-radius: var(--marquee-radius);
}

.video-progress-bar {
  accent-color: var(--marquee-accent);
}

.video-overlay__error-text {
  color: var(--marquee-error);
}
"#
    }

    /// The full default stylesheet: variables plus baseline rules
    pub fn to_css(&self) -> String {
        format!("{}\n{}", self.css_variables(), Self::base_css())
    }

    /// Export as JSON for host-side tooling
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let colors = ThemeColors::default();
        assert_eq!(colors.accent, "#e54b4b");
        assert_eq!(colors.background, "#000000");
    }

    #[test]
    fn test_css_variables_contain_palette() {
        let css = Theme::default().css_variables();
        assert!(css.contains("--marquee-accent: #e54b4b"));
        assert!(css.contains("--marquee-radius: 2px"));
        assert!(css.starts_with(":root {"));
    }

    #[test]
    fn test_full_stylesheet_includes_base_rules() {
        let css = Theme::default().to_css();
        assert!(css.contains(".video-overlay__error-text"));
        assert!(css.contains("var(--marquee-accent)"));
    }

    #[test]
    fn test_theme_json() {
        let json = Theme::default().to_json();
        assert!(json.contains("#e54b4b"));
        assert!(json.contains("border_radius"));
    }

    #[test]
    fn test_theme_deserializes_from_host_json() {
        let json = r##"{
            "colors": {
                "accent": "#112233",
                "background": "#000000",
                "buffer": "rgba(255, 255, 255, 0.2)",
                "text": "#eeeeee",
                "error": "#ff0000",
                "control_bar": "rgba(0, 0, 0, 0.5)"
            },
            "border_radius": 4
        }"##;
        let theme: Theme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.colors.accent, "#112233");
        assert_eq!(theme.border_radius, 4);
        assert!(theme.css_variables().contains("--marquee-accent: #112233"));
    }
}
