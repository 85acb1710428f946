//! Duration formatting for cutscene subtitles.

/// Formats a duration in seconds as `minutes:seconds`.
///
/// Both components are floored. Minutes are unbounded (an hour renders as
/// `60:0`) and seconds are not zero-padded, so 65 seconds renders as `1:5`.
/// Negative and non-finite input go through the same arithmetic. Components
/// of magnitude 1e21 and above render in exponent form (`1e+21`).
#[must_use]
pub fn format_duration(total_seconds: f64) -> String {
    let minutes = (total_seconds / 60.0).floor();
    let seconds = (total_seconds % 60.0).floor();
    format!("{}:{}", render_component(minutes), render_component(seconds))
}

/// Magnitude from which components switch to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

fn render_component(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_owned()
        } else {
            "Infinity".to_owned()
        }
    } else if value.abs() >= EXPONENT_THRESHOLD {
        let rendered = format!("{value:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        }
    } else {
        // Adding zero folds -0.0 into 0.0.
        format!("{}", value + 0.0)
    }
}
