use std::collections::HashMap;

use chrono::Utc;
use log::debug;

use crate::config::SheetSchema;
use crate::domain::{AttendanceRow, RowSet, normalize_name, parse_attendance_rows};
use crate::values::{CellStatus, classify_status, parse_mileage};

use super::types::{SeasonReport, SeasonTotal};

/// Which of the six weekday columns carry any data this week. A column with
/// no entry for any athlete (a future day, usually) is excluded from all
/// counting so it cannot inflate the active-day denominator.
pub fn active_columns(rows: &[AttendanceRow]) -> [bool; 6] {
    let mut active = [false; 6];

    for row in rows {
        for (day, cell) in row.daily.iter().enumerate() {
            if !cell.trim().is_empty() {
                active[day] = true;
            }
        }
    }

    active
}

/// Fold every week tab into season totals.
///
/// Weeks are processed in caller order (earliest first), which fixes both the
/// first-seen athlete ordering and the last-non-empty group assignment. Pure
/// function of its input apart from the generation timestamp.
pub fn aggregate_season(weeks: &[RowSet], schema: &SheetSchema) -> SeasonReport {
    let mut totals: Vec<SeasonTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut team_miles = 0.0;
    let mut total_absences = 0u32;
    let mut total_active_days = 0u32;

    for (week_idx, week) in weeks.iter().enumerate() {
        let rows = parse_attendance_rows(week, schema);
        let active = active_columns(&rows);
        debug!(
            "week {}: {} athlete rows, {} active columns",
            week_idx + 1,
            rows.len(),
            active.iter().filter(|&&a| a).count()
        );

        for row in &rows {
            let key = normalize_name(&row.full_name());
            let slot = *index.entry(key).or_insert_with(|| {
                totals.push(SeasonTotal::new(
                    row.full_name(),
                    row.display_name(),
                    row.gender(),
                    row.group_label().to_string(),
                ));
                totals.len() - 1
            });
            let entry = &mut totals[slot];

            // A week with a blank group cell retains the previous label.
            if !row.group.is_empty() {
                entry.group = row.group.clone();
            }

            for day in 0..row.daily.len() {
                if !active[day] {
                    continue;
                }

                let cell = &row.daily[day];
                let miles = parse_mileage(cell);
                entry.miles += miles;
                team_miles += miles;

                let status = classify_status(cell);
                if status.is_absence() {
                    entry.absences += 1;
                    total_absences += 1;
                }
                match status {
                    CellStatus::Absent => entry.absent += 1,
                    CellStatus::Excused => entry.excused += 1,
                    CellStatus::Injured => entry.injured += 1,
                    CellStatus::Present | CellStatus::Empty => {}
                }

                total_active_days += 1;
            }
        }
    }

    SeasonReport {
        totals,
        team_miles,
        total_absences,
        total_active_days,
        weeks_processed: weeks.len(),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    fn week(rows: &[&[&str]]) -> RowSet {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn legacy_week(name: &str, days: [&str; 6]) -> RowSet {
        week(&[&[
            name, "", days[0], days[1], days[2], days[3], days[4], days[5],
        ]])
    }

    #[test]
    fn test_two_week_season_example() {
        let schema = SheetSchema::legacy();
        let weeks = vec![
            legacy_week("Jordan (F)", ["5", "5", "A", "5", "5", "5"]),
            legacy_week("Jordan (F)", ["6", "INJ", "6", "6", "6", "6"]),
        ];

        let report = aggregate_season(&weeks, &schema);
        assert_eq!(report.totals.len(), 1);

        let jordan = &report.totals[0];
        assert_eq!(jordan.miles, 55.0);
        assert_eq!(jordan.absences, 2);
        assert_eq!(jordan.absent, 1);
        assert_eq!(jordan.injured, 1);
        assert_eq!(jordan.gender, Gender::Girls);
        assert_eq!(jordan.display_name, "Jordan");

        assert_eq!(report.team_miles, 55.0);
        assert_eq!(report.total_absences, 2);
        assert_eq!(report.total_active_days, 12);
    }

    #[test]
    fn test_empty_columns_are_excluded() {
        let schema = SheetSchema::legacy();
        // Only Mon-Wed entered so far; Thu-Sat must not count as active days.
        let weeks = vec![week(&[
            &["Reyes", "Sam", "4", "A", "5", "", "", ""],
            &["Kim", "Dana", "3", "3", "", "", "", ""],
        ])];

        let report = aggregate_season(&weeks, &schema);
        assert_eq!(report.total_active_days, 6);
        assert_eq!(report.total_absences, 1);
        assert_eq!(report.team_miles, 15.0);
    }

    #[test]
    fn test_absence_invariant_holds() {
        let schema = SheetSchema::legacy();
        let weeks = vec![
            legacy_week("Reyes", ["A", "XA", "INJ", "5", "A", "2"]),
            legacy_week("Reyes", ["XA", "1", "1", "1", "1", "1"]),
        ];

        let report = aggregate_season(&weeks, &schema);
        for athlete in &report.totals {
            assert_eq!(
                athlete.absences,
                athlete.absent + athlete.excused + athlete.injured
            );
        }
        assert_eq!(report.totals[0].absences, 4);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let schema = SheetSchema::legacy();
        let weeks = vec![
            legacy_week("Jordan (F)", ["5", "5", "A", "5", "5", "5"]),
            legacy_week("Reyes", ["6", "", "6", "6", "XA", "6"]),
        ];

        let first = aggregate_season(&weeks, &schema);
        let second = aggregate_season(&weeks, &schema);

        assert_eq!(first.totals, second.totals);
        assert_eq!(first.team_miles, second.team_miles);
        assert_eq!(first.total_absences, second.total_absences);
        assert_eq!(first.total_active_days, second.total_active_days);
    }

    #[test]
    fn test_group_last_non_empty_wins() {
        let schema = SheetSchema::current();
        let weeks = vec![
            week(&[&["Reyes", "Sam", "JV", "5", "", "", "", "", "", "5"]]),
            week(&[&["Reyes", "Sam", "", "5", "", "", "", "", "", "5"]]),
            week(&[&["Reyes", "Sam", "Varsity", "5", "", "", "", "", "", "5"]]),
            week(&[&["Reyes", "Sam", "", "5", "", "", "", "", "", "5"]]),
        ];

        let report = aggregate_season(&weeks, &schema);
        assert_eq!(report.totals[0].group, "Varsity");
    }

    #[test]
    fn test_attendance_health() {
        let schema = SheetSchema::legacy();
        let weeks = vec![legacy_week("Reyes", ["A", "5", "5", "5", "5", "5"])];

        let report = aggregate_season(&weeks, &schema);
        let health = report.attendance_health();
        assert!((health - (1.0 - 1.0 / 6.0) * 100.0).abs() < 1e-9);

        let empty = aggregate_season(&[], &schema);
        assert_eq!(empty.attendance_health(), 100.0);
    }
}
