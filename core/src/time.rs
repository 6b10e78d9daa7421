use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use anyhow::{anyhow, Result};

const ISO_FORMAT: &str = "%Y-%m-%d";
const DAY_FIRST_FORMAT: &str = "%d-%m-%Y";

/// The academy keeps its books in IST (UTC+05:30).
pub fn academy_offset() -> Duration {
    Duration::minutes(5 * 60 + 30)
}

/// Today's date on the academy's wall clock.
pub fn academy_today() -> NaiveDate {
    (Utc::now() + academy_offset()).date_naive()
}

/// Storage key for an attendance date.
pub fn iso_key(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Strict `YYYY-MM-DD`. Attendance keys are only ever read with this.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_FORMAT)
        .map_err(|e| anyhow!("Invalid ISO date '{}': {}", input, e))
}

/// `YYYY-MM-DD`, then `DD-MM-YYYY`. Anything else is an error, never "now".
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(input, ISO_FORMAT) {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, DAY_FIRST_FORMAT) {
        return Ok(d);
    }
    Err(anyhow!("Could not parse date: {}", input))
}

/// Week of the calendar year with Sunday-started weeks:
/// `ceil((days since Jan 1 + weekday of Jan 1 + 1) / 7)`.
///
/// Weeks are not carried across the new year, so Dec 31 and Jan 1 always
/// land in different (week, year) pairs.
pub fn week_number(date: NaiveDate) -> u32 {
    let days_since_jan1 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - days_since_jan1 % 7) % 7;
    (days_since_jan1 + jan1_weekday + 1).div_ceil(7)
}

pub fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    week_number(a) == week_number(b) && a.year() == b.year()
}

/// Attendance can't be taken ahead of time.
pub fn is_markable(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

/// [`parse_human_date`], rejecting days after `today`.
pub fn parse_attendance_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = parse_human_date(input, today)?;
    if !is_markable(date, today) {
        return Err(anyhow!("Cannot mark attendance for {}, it is after today ({})", date, today));
    }
    Ok(date)
}

/// Dates as a coach types them when marking attendance after the fact.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (-Nd, +Nd, -Nw)
    if let Some(sign) = input.chars().next().filter(|c| *c == '+' || *c == '-') {
        if input.len() >= 3 && input.is_char_boundary(input.len() - 1) {
            let (num_str, unit) = input[1..].split_at(input.len() - 2);
            if let Ok(count) = num_str.parse::<i64>() {
                let count = if sign == '-' { -count } else { count };
                let delta = match unit {
                    "d" => Duration::try_days(count),
                    "w" => Duration::try_weeks(count),
                    _ => return Err(anyhow!("Unknown unit in relative date: {}", unit)),
                };
                return delta
                    .and_then(|delta| today.checked_add_signed(delta))
                    .ok_or_else(|| anyhow!("Date out of range: {}", input));
            }
        }
    }

    // 3. Weekday name: the most recent such day, today included
    if let Ok(target) = parse_weekday_str(input) {
        let back = (today.weekday().num_days_from_sunday() + 7 - target.num_days_from_sunday()) % 7;
        return Ok(today - Duration::days(back as i64));
    }

    // 4. Fallback to explicit formats
    parse_date(input)
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}
