//! Elapsed-time formatting for the counter message.

use crate::server::model::counter::Elapsed;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Splits the time since `last_reset_at` into whole days and an `HH:MM:SS` clock.
///
/// A reset dated in the future (clock skew, hand-edited database) clamps to zero.
pub fn format_elapsed(last_reset_at: i64, now: i64) -> Elapsed {
    let delta = now.saturating_sub(last_reset_at).max(0);

    let days = delta / SECONDS_PER_DAY;
    let rem = delta % SECONDS_PER_DAY;
    let hours = rem / SECONDS_PER_HOUR;
    let minutes = rem % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = rem % SECONDS_PER_MINUTE;

    Elapsed {
        days,
        clock: format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
    }
}

/// Renders the message content shown in the counter channel.
pub fn render_content(elapsed: &Elapsed) -> String {
    format!(
        "**Days without incidents:** **{}**\n`{}` since the last reset",
        elapsed.days, elapsed.clock
    )
}
