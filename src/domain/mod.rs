pub mod models;

pub use models::{
    AttendanceRow, Gender, RaceResultRow, RelayLeg, RowSet, WeekSnapshot, normalize_name,
    parse_attendance_rows, parse_race_rows, split_athlete_name,
};
