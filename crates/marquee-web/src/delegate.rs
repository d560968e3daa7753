//! The control delegate
//!
//! A fixed set of callbacks through which every control drives playback.
//! The root player builds one delegate in `Component::create` and clones it
//! thereafter; `yew::Callback` equality is pointer equality, so the
//! identities stay stable across renders. Control re-render gates depend on
//! that stability.

use yew::Callback;

/// Imperative playback operations exposed to descendant controls.
///
/// Controls never touch the media element; these callbacks route every
/// operation through the root player.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDelegate {
    /// Play if paused, else pause, judged on last-known derived state
    pub toggle_play: Callback<()>,
    /// Mute if unmuted, else unmute, judged on last-known derived state
    pub toggle_mute: Callback<()>,
    pub play: Callback<()>,
    pub pause: Callback<()>,
    pub mute: Callback<()>,
    pub unmute: Callback<()>,
    /// `(time_seconds, force)`; `force` re-derives state synchronously so
    /// drag interactions do not wait out the throttle window
    pub seek: Callback<(f64, bool)>,
    /// `(volume 0.0..=1.0, force)`; same force semantics as `seek`
    pub set_volume: Callback<(f64, bool)>,
    /// Always force-resynchronizes; not every engine fires `ratechange`
    pub set_playback_rate: Callback<f64>,
    /// Best-effort fullscreen request; silent no-op when unsupported
    pub fullscreen: Callback<()>,
    /// Reload the media element's source list
    pub load: Callback<()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delegate() -> ControlDelegate {
        ControlDelegate {
            toggle_play: Callback::noop(),
            toggle_mute: Callback::noop(),
            play: Callback::noop(),
            pause: Callback::noop(),
            mute: Callback::noop(),
            unmute: Callback::noop(),
            seek: Callback::noop(),
            set_volume: Callback::noop(),
            set_playback_rate: Callback::noop(),
            fullscreen: Callback::noop(),
            load: Callback::noop(),
        }
    }

    #[test]
    fn test_clone_preserves_callback_identity() {
        let original = delegate();
        let cloned = original.clone();
        // Pointer equality survives the per-render clone
        assert_eq!(original, cloned);
        assert_eq!(original.seek, cloned.seek);
    }

    #[test]
    fn test_rebuilt_delegate_has_fresh_identity() {
        let a = delegate();
        let b = delegate();
        assert_ne!(a.toggle_play, b.toggle_play);
    }
}
