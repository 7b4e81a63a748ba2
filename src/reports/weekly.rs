use crate::analytics::active_columns;
use crate::config::SheetSchema;
use crate::domain::{Gender, RowSet, parse_attendance_rows};
use crate::values::{CellStatus, classify_status};

pub const WEEKDAY_LABELS: [&str; 6] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One rendered athlete line of the weekly table.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRow {
    pub display_name: String,
    pub gender: Gender,
    pub group: String,
    /// Display cells: mileage/status verbatim, synthetic "P" for a blank
    /// cell in an active column, blank for inactive columns.
    pub day_cells: [String; 6],
    pub total_miles: f64,
}

/// Table entries in render order; a section header is synthesized whenever
/// the (gender, group) pair changes between consecutive sorted rows.
#[derive(Debug, Clone, PartialEq)]
pub enum WeeklyEntry {
    Section { gender: Gender, group: String },
    Athlete(WeeklyRow),
}

#[derive(Debug, Clone)]
pub struct WeeklyTable {
    pub entries: Vec<WeeklyEntry>,
    pub active: [bool; 6],
}

/// Build the sorted weekly mileage table for one week tab: girls before
/// boys, then group label, stable within each section.
pub fn weekly_table(rows: &RowSet, schema: &SheetSchema) -> WeeklyTable {
    let parsed = parse_attendance_rows(rows, schema);
    let active = active_columns(&parsed);

    let mut athlete_rows: Vec<WeeklyRow> = parsed
        .iter()
        .map(|row| {
            let mut day_cells: [String; 6] = Default::default();
            for (day, cell) in row.daily.iter().enumerate() {
                day_cells[day] = display_cell(cell, active[day]);
            }

            WeeklyRow {
                display_name: row.display_name(),
                gender: row.gender(),
                group: row.group_label().to_string(),
                day_cells,
                total_miles: row.total_miles(schema),
            }
        })
        .collect();

    athlete_rows.sort_by(|a, b| a.gender.cmp(&b.gender).then_with(|| a.group.cmp(&b.group)));

    let mut entries = Vec::with_capacity(athlete_rows.len() + 4);
    let mut current_section: Option<(Gender, String)> = None;

    for row in athlete_rows {
        let section = (row.gender, row.group.clone());
        if current_section.as_ref() != Some(&section) {
            entries.push(WeeklyEntry::Section {
                gender: row.gender,
                group: row.group.clone(),
            });
            current_section = Some(section);
        }
        entries.push(WeeklyEntry::Athlete(row));
    }

    WeeklyTable { entries, active }
}

fn display_cell(cell: &str, column_active: bool) -> String {
    if !column_active {
        return String::new();
    }

    if cell.trim().is_empty() {
        // Present is inferred, never stored in the sheet.
        return CellStatus::Present.code().to_string();
    }

    match classify_status(cell) {
        CellStatus::Empty => cell.trim().to_string(),
        status => status.code().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> RowSet {
        data.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_sorted_girls_first_with_section_headers() {
        let schema = SheetSchema::current();
        let raw = rows(&[
            &["Cole", "Ben", "JV", "5", "4", "", "", "", "", "9"],
            &["Kim (F)", "Dana", "Varsity", "6", "6", "", "", "", "", "12"],
            &["Reyes", "Sam", "Varsity", "7", "5", "", "", "", "", "12"],
            &["Ruiz (F)", "Ana", "Varsity", "5", "5", "", "", "", "", "10"],
        ]);

        let table = weekly_table(&raw, &schema);

        let mut kinds = Vec::new();
        for entry in &table.entries {
            match entry {
                WeeklyEntry::Section { gender, group } => {
                    kinds.push(format!("[{} {}]", gender.label(), group));
                }
                WeeklyEntry::Athlete(row) => kinds.push(row.display_name.clone()),
            }
        }

        assert_eq!(
            kinds,
            vec![
                "[Girls Varsity]",
                "Dana Kim",
                "Ana Ruiz",
                "[Boys JV]",
                "Ben Cole",
                "[Boys Varsity]",
                "Sam Reyes",
            ]
        );
    }

    #[test]
    fn test_synthetic_present_only_in_active_columns() {
        let schema = SheetSchema::current();
        let raw = rows(&[
            &["Reyes", "Sam", "JV", "5", "", "A", "", "", "", "5"],
            &["Kim", "Dana", "JV", "4", "3", "", "", "", "", "7"],
        ]);

        let table = weekly_table(&raw, &schema);
        let first = match &table.entries[1] {
            WeeklyEntry::Athlete(row) => row,
            other => panic!("expected athlete row, got {:?}", other),
        };

        // Tue has data for Kim, so Reyes' blank renders as synthetic P.
        assert_eq!(first.day_cells[1], "P");
        assert_eq!(first.day_cells[2], "A");
        // Thu-Sat have no data anywhere: inactive, rendered blank.
        assert_eq!(first.day_cells[3], "");
        assert!(!table.active[3]);
    }
}
