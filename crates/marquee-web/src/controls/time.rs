//! Elapsed / total time display

use yew::prelude::*;

use super::ControlProps;

pub struct Time;

impl Component for Time {
    type Message = ();
    type Properties = ControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let new = &ctx.props().player.state;
        let old = &old_props.player.state;
        new.current_time != old.current_time || new.duration != old.duration
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = &ctx.props().player.state;
        html! {
            <span class="video-time video__control">
                { format!("{} / {}", format_time(state.current_time), format_time(state.duration)) }
            </span>
        }
    }
}

/// `M:SS`, growing to `H:MM:SS` past an hour. A fresh element reports NaN
/// duration; render that as zero rather than propagating it.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_minutes_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.4), "0:09");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn test_format_time_hours() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3661.0), "1:01:01");
    }

    #[test]
    fn test_format_time_nan_and_negative() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-5.0), "0:00");
    }
}
