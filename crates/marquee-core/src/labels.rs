//! UI labels and localization
//!
//! Every piece of copy the player renders (accessibility labels, the source
//! error message) comes from a [`Labels`] mapping resolved once at
//! construction: the built-in defaults merged with whatever the host
//! overrides. There is no process-wide mutable copy table.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Resolved UI copy, read-only at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub play: Cow<'static, str>,
    pub pause: Cow<'static, str>,
    pub mute: Cow<'static, str>,
    pub unmute: Cow<'static, str>,
    pub volume: Cow<'static, str>,
    pub seek: Cow<'static, str>,
    pub fullscreen: Cow<'static, str>,
    pub restart: Cow<'static, str>,
    /// Message shown by the overlay when no usable source exists
    pub source_error: Cow<'static, str>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            play: Cow::Borrowed("Play video"),
            pause: Cow::Borrowed("Pause video"),
            mute: Cow::Borrowed("Mute video"),
            unmute: Cow::Borrowed("Unmute video"),
            volume: Cow::Borrowed("Change volume"),
            seek: Cow::Borrowed("Seek video"),
            fullscreen: Cow::Borrowed("View video fullscreen"),
            restart: Cow::Borrowed("Restart video"),
            source_error: Cow::Borrowed("The video could not be loaded."),
        }
    }
}

impl Labels {
    /// Defaults merged with the given overrides
    pub fn resolve(overrides: &LabelOverrides) -> Self {
        let mut labels = Labels::default();
        overrides.apply_to(&mut labels);
        labels
    }
}

/// Partial label mapping supplied by the host; unset fields keep defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub play: Option<String>,
    pub pause: Option<String>,
    pub mute: Option<String>,
    pub unmute: Option<String>,
    pub volume: Option<String>,
    pub seek: Option<String>,
    pub fullscreen: Option<String>,
    pub restart: Option<String>,
    pub source_error: Option<String>,
}

impl LabelOverrides {
    fn apply_to(&self, labels: &mut Labels) {
        fn set(target: &mut Cow<'static, str>, value: &Option<String>) {
            if let Some(value) = value {
                *target = Cow::Owned(value.clone());
            }
        }
        set(&mut labels.play, &self.play);
        set(&mut labels.pause, &self.pause);
        set(&mut labels.mute, &self.mute);
        set(&mut labels.unmute, &self.unmute);
        set(&mut labels.volume, &self.volume);
        set(&mut labels.seek, &self.seek);
        set(&mut labels.fullscreen, &self.fullscreen);
        set(&mut labels.restart, &self.restart);
        set(&mut labels.source_error, &self.source_error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let labels = Labels::resolve(&LabelOverrides::default());
        assert_eq!(labels, Labels::default());
    }

    #[test]
    fn test_partial_override_merges_over_defaults() {
        let overrides = LabelOverrides {
            source_error: Some("Video konnte nicht geladen werden.".to_string()),
            fullscreen: Some("Vollbild".to_string()),
            ..Default::default()
        };
        let labels = Labels::resolve(&overrides);
        assert_eq!(labels.source_error, "Video konnte nicht geladen werden.");
        assert_eq!(labels.fullscreen, "Vollbild");
        // Untouched keys keep the defaults
        assert_eq!(labels.seek, Labels::default().seek);
    }

    #[test]
    fn test_overrides_deserialize_with_missing_fields() {
        let overrides: LabelOverrides = serde_json::from_str(r#"{"seek": "Spulen"}"#).unwrap();
        assert_eq!(overrides.seek.as_deref(), Some("Spulen"));
        assert!(overrides.play.is_none());
    }
}
