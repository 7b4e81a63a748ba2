use std::sync::LazyLock;

use regex::Regex;

/// Sentinel for cells that hold no usable race time. Large enough that an
/// ascending sort pushes these rows past every real performance.
pub const NO_TIME_SECS: f64 = 999_999.0;

static MINUTES_SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{1,2}(?:\.\d+)?)$").expect("static pattern compiles"));

/// Classification of a single weekday cell.
///
/// `Present` is never parsed from sheet data; the weekly view synthesizes it
/// for blank cells in columns that carry data elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Absent,
    Excused,
    Injured,
    Present,
    Empty,
}

impl CellStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CellStatus::Absent => "A",
            CellStatus::Excused => "XA",
            CellStatus::Injured => "INJ",
            CellStatus::Present => "P",
            CellStatus::Empty => "",
        }
    }

    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            CellStatus::Absent | CellStatus::Excused | CellStatus::Injured
        )
    }
}

/// Parse a weekday cell as mileage. Status codes, blanks and garbage all
/// count as zero miles; a bad cell must never abort a report.
pub fn parse_mileage(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}

/// Exact-match classification of the attendance status codes.
pub fn classify_status(cell: &str) -> CellStatus {
    match cell.trim() {
        "A" => CellStatus::Absent,
        "XA" => CellStatus::Excused,
        "INJ" => CellStatus::Injured,
        _ => CellStatus::Empty,
    }
}

/// True for the cell values that mean "no time recorded".
pub fn is_no_time(cell: &str) -> bool {
    matches!(cell.trim(), "" | "-" | "--" | "0")
}

/// Parse a race time cell into seconds.
///
/// Supports bare seconds (`"270.5"`) and minutes:seconds (`"4:30.5"`).
/// Sentinel and malformed cells map to [`NO_TIME_SECS`].
pub fn parse_race_time(cell: &str) -> f64 {
    let trimmed = cell.trim();

    if is_no_time(trimmed) {
        return NO_TIME_SECS;
    }

    if let Some(caps) = MINUTES_SECONDS_RE.captures(trimmed) {
        let minutes: f64 = caps[1].parse().unwrap_or(0.0);
        let seconds: f64 = caps[2].parse().unwrap_or(0.0);
        return minutes * 60.0 + seconds;
    }

    trimmed.parse::<f64>().unwrap_or(NO_TIME_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mileage_numeric_and_fallbacks() {
        assert_eq!(parse_mileage("5"), 5.0);
        assert_eq!(parse_mileage(" 6.5 "), 6.5);
        assert_eq!(parse_mileage(""), 0.0);
        assert_eq!(parse_mileage("A"), 0.0);
        assert_eq!(parse_mileage("XA"), 0.0);
        assert_eq!(parse_mileage("rest day"), 0.0);
    }

    #[test]
    fn test_classify_status_exact_codes() {
        assert_eq!(classify_status("A"), CellStatus::Absent);
        assert_eq!(classify_status(" XA "), CellStatus::Excused);
        assert_eq!(classify_status("INJ"), CellStatus::Injured);
        assert_eq!(classify_status("P"), CellStatus::Empty);
        assert_eq!(classify_status("5.0"), CellStatus::Empty);
        assert_eq!(classify_status(""), CellStatus::Empty);
    }

    #[test]
    fn test_parse_race_time_formats() {
        assert_eq!(parse_race_time("4:30.5"), 270.5);
        assert_eq!(parse_race_time("12.3"), 12.3);
        assert_eq!(parse_race_time("270.5"), 270.5);
        assert_eq!(parse_race_time("10:00"), 600.0);
    }

    #[test]
    fn test_parse_race_time_sentinels() {
        for cell in ["", "-", "--", "0", "  ", "dnf"] {
            assert!(parse_race_time(cell) >= 999_999.0, "cell {:?}", cell);
        }
    }
}
