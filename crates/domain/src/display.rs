//! Display model of the home view, derived from a [`StatusSnapshot`].

use chrono::{TimeZone, Utc};

use crate::buttons::ButtonState;
use crate::cube::{self, CubeSlot, SLOT_COUNT};
use crate::status::StatusSnapshot;
use crate::time::{self, Nanos};

/// Start time shown before a run has started.
pub const EMPTY_TIME: &str = "00:00:00";

/// Everything the home view shows, as ready-to-render values.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeDisplay {
    pub status: String,
    /// Local time-of-day the run started.
    pub start_time: String,
    /// Seconds from start until the configuration was recognised.
    pub config_duration: String,
    /// Seconds from start until the run ended.
    pub total_duration: String,
    pub energy: String,
    pub progress: String,
    pub progress_max: u32,
    pub progress_value: u32,
    pub cubes: [CubeSlot; SLOT_COUNT],
    pub config_complete: bool,
    pub buttons: ButtonState,
}

impl HomeDisplay {
    /// Build the display for `snapshot`, rendering wall-clock times in `zone`.
    #[must_use]
    pub fn from_snapshot<Tz>(snapshot: &StatusSnapshot, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let cubes = cube::slots_from_config(snapshot.config.as_deref());
        let start = snapshot.time_start.unwrap_or(0);

        Self {
            status: snapshot.status_text().to_string(),
            start_time: start_time(snapshot.time_start, zone),
            config_duration: duration(start, snapshot.time_config.unwrap_or(0)),
            total_duration: duration(start, snapshot.time_end.unwrap_or(0)),
            energy: format!("{} Wh", format_fixed(snapshot.energy.unwrap_or(0.0))),
            progress: progress_percent(snapshot.steps_finished, snapshot.steps_total),
            progress_max: snapshot.steps_total.unwrap_or(0),
            progress_value: snapshot.steps_finished.unwrap_or(0),
            config_complete: cube::is_complete(&cubes),
            cubes,
            buttons: ButtonState::for_status(snapshot.status()),
        }
    }
}

impl Default for HomeDisplay {
    fn default() -> Self {
        Self::from_snapshot(&StatusSnapshot::default(), &Utc)
    }
}

fn start_time<Tz>(time_start: Option<Nanos>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time_start
        .filter(|&nanos| nanos != 0)
        .and_then(time::nanos_to_datetime)
        .map_or_else(|| EMPTY_TIME.to_string(), |at| time::time_of_day(at, zone))
}

fn duration(start: Nanos, end: Nanos) -> String {
    format!("{} s", format_fixed(time::elapsed_seconds(start, end)))
}

/// Completed share of the build steps, rounded up, e.g. `"34%"`.
///
/// Reads `"0%"` whenever the total is missing or zero.
#[must_use]
pub fn progress_percent(steps_finished: Option<u32>, steps_total: Option<u32>) -> String {
    match steps_total {
        Some(total) if total != 0 => {
            let finished = f64::from(steps_finished.unwrap_or(0));
            let percent = (100.0 / f64::from(total) * finished).ceil();
            format!("{percent}%")
        }
        _ => "0%".to_string(),
    }
}

/// Format with three decimals and `,` thousands separators (`en-US` style).
///
/// Rounds the shortest decimal form of `value` half away from zero, so
/// `0.0625` reads `"0.063"`.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let (integer, fraction) = round_fraction(&value.abs().to_string());
    format!("{sign}{}.{fraction}", group_thousands(&integer))
}

const FRACTION_DIGITS: usize = 3;

/// Round a plain unsigned decimal to [`FRACTION_DIGITS`] places.
fn round_fraction(decimal: &str) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(FRACTION_DIGITS))
        .collect();

    if fraction
        .as_bytes()
        .get(FRACTION_DIGITS)
        .is_some_and(|&digit| digit >= b'5')
    {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - FRACTION_DIGITS;
    let text = |range: &[u8]| range.iter().copied().map(char::from).collect::<String>();
    (text(&digits[..split]), text(&digits[split..]))
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
