//! Playback overlay
//!
//! Selects exactly one of three mutually exclusive renderings: the source
//! error message, the loading spinner, or the play affordance. Error wins
//! over loading wins over paused.

use marquee_core::{Labels, PlayerState};
use yew::prelude::*;

use crate::controls::ControlProps;
use crate::icon::Icon;
use crate::spinner::Spinner;

pub struct Overlay;

impl Component for Overlay {
    type Message = ();
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let new = &ctx.props().player;
        let old = &old_props.player;
        new.state.error != old.state.error
            || new.state.loading != old.state.loading
            || new.state.paused != old.state.paused
            || ended(&new.state) != ended(&old.state)
            || new.delegate.toggle_play != old.delegate.toggle_play
            || new.labels != old.labels
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let player = &ctx.props().player;
        let content = if player.state.error {
            html! {
                <div class="video-overlay__error">
                    <p class="video-overlay__error-text">{ player.labels.source_error.to_string() }</p>
                </div>
            }
        } else if player.state.loading {
            html! {
                <div class="video-overlay__loader">
                    <Spinner />
                </div>
            }
        } else {
            let label = affordance_label(&player.state, &player.labels).to_string();
            let onclick = {
                let toggle_play = player.delegate.toggle_play.clone();
                Callback::from(move |_: MouseEvent| toggle_play.emit(()))
            };
            html! {
                <div class="video-overlay__play" role="button" aria-label={label} {onclick}>
                    if player.state.paused {
                        <Icon name="play" />
                    }
                </div>
            }
        };
        html! {
            <div class="video-overlay">
                { content }
            </div>
        }
    }
}

/// Playback has run to the end of a known duration
fn ended(state: &PlayerState) -> bool {
    state.duration > 0.0 && state.current_time >= state.duration
}

/// Clicking the affordance toggles playback; at the end of the media the
/// same click starts over, and the label says so
fn affordance_label<'a>(state: &PlayerState, labels: &'a Labels) -> &'a str {
    if ended(state) {
        &labels.restart
    } else if state.paused {
        &labels.play
    } else {
        &labels.pause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affordance_label_tracks_playback() {
        let labels = Labels::default();
        let mut state = PlayerState::initial(false, false);
        assert_eq!(affordance_label(&state, &labels), "Play video");
        state.paused = false;
        assert_eq!(affordance_label(&state, &labels), "Pause video");
    }

    #[test]
    fn test_affordance_label_offers_restart_at_the_end() {
        let labels = Labels::default();
        let mut state = PlayerState::initial(false, false);
        state.duration = 12.0;
        state.current_time = 12.0;
        assert_eq!(affordance_label(&state, &labels), "Restart video");
    }

    #[test]
    fn test_ended_requires_known_duration() {
        let mut state = PlayerState::initial(false, false);
        assert!(!ended(&state));
        state.duration = f64::NAN;
        state.current_time = 5.0;
        assert!(!ended(&state));
        state.duration = 4.0;
        assert!(ended(&state));
    }
}
