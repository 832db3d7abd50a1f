use chrono::{Datelike, Duration, NaiveDate};

/// Dutch day names, Monday-first to match the week view layout
pub const DAY_NAMES: [&str; 7] = [
    "Maandag",
    "Dinsdag",
    "Woensdag",
    "Donderdag",
    "Vrijdag",
    "Zaterdag",
    "Zondag",
];

/// Dutch month names (long form), January-first
pub const MONTHS_LONG: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Dutch month abbreviations, January-first
pub const MONTHS_SHORT: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Return the Monday of the week containing `date`.
/// The week starts on Monday, so Sunday maps back to the previous Monday.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(days_from_monday)
}

/// Dutch day name for a date
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// Dutch long month name for a date
pub fn month_long(date: NaiveDate) -> &'static str {
    MONTHS_LONG[date.month0() as usize]
}

/// Dutch month abbreviation for a date
pub fn month_short(date: NaiveDate) -> &'static str {
    MONTHS_SHORT[date.month0() as usize]
}

/// Week number for the week starting at `week_start`.
/// Computed from the zero-based day of year plus January 1st's weekday
/// (Sunday = 0), divided by 7 and rounded up.
pub fn week_number(week_start: NaiveDate) -> u32 {
    // Day 1 exists in every year
    let jan1 = week_start.with_ordinal(1).unwrap_or(week_start);
    let day_of_year = week_start.ordinal0();
    let jan1_weekday = jan1.weekday().num_days_from_sunday();
    (day_of_year + jan1_weekday + 1 + 6) / 7
}

/// Long date label for the day view header, e.g. "4 maart 2024"
pub fn format_single_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_long(date), date.year())
}

/// Week label for the week view header.
/// Renders one month abbreviation when the 7-day span stays within a month,
/// both abbreviations when it crosses a month boundary.
pub fn format_week_range(week_start: NaiveDate) -> String {
    let week_end = week_start + Duration::days(6);
    let week = week_number(week_start);

    if week_start.month() == week_end.month() {
        format!(
            "Week {} - ({} t/m {} {}, {})",
            week,
            week_start.day(),
            week_end.day(),
            month_short(week_start),
            week_start.year()
        )
    } else {
        format!(
            "Week {} - ({} {} t/m {} {}, {})",
            week,
            week_start.day(),
            month_short(week_start),
            week_end.day(),
            month_short(week_end),
            week_start.year()
        )
    }
}

/// Zero-padded YYYY-MM-DD key from local calendar components.
/// Never goes through UTC, so the key matches the user's wall-clock date.
pub fn format_date_key(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Parse a YYYY-MM-DD key back into a date. Strict inverse of format_date_key.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
