use serde::{Deserialize, Serialize};

use crate::config::{SheetSchema, TotalsMode};
use crate::values::parse_mileage;

/// Raw cell data for one tab: outer = rows, inner = columns. An empty result
/// means "no data", never an error.
pub type RowSet = Vec<Vec<String>>;

/// One fetched week tab, kept in sheet order so season folds are stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSnapshot {
    pub title: String,
    pub rows: RowSet,
}

pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// Marker the sheet uses to tag girls' names ("Jordan (F)"). Everyone else
/// is classified as a boy. Inherited from the spreadsheet convention.
pub const GIRL_TAG: &str = "(F)";

/// Declaration order is display order: girls sections come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Girls,
    Boys,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Girls => "Girls",
            Gender::Boys => "Boys",
        }
    }
}

/// Case- and whitespace-insensitive key for athlete lookups across tabs.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Split a raw sheet name into (display name, gender), stripping the tag.
pub fn split_athlete_name(raw: &str) -> (String, Gender) {
    let gender = if raw.contains(GIRL_TAG) {
        Gender::Girls
    } else {
        Gender::Boys
    };

    let display = raw
        .replace(GIRL_TAG, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    (display, gender)
}

/// One athlete's record for one week tab. Immutable snapshot; superseded
/// wholesale whenever the tab is re-fetched.
#[derive(Debug, Clone)]
pub struct AttendanceRow {
    pub last_name: String,
    pub first_name: String,
    /// Raw group cell; empty when the sheet revision has no group column.
    pub group: String,
    /// Mon-Sat cells, verbatim.
    pub daily: [String; 6],
    /// Raw "Total" cell when the schema has one.
    total_cell: String,
}

impl AttendanceRow {
    pub fn from_row(row: &[String], schema: &SheetSchema) -> Option<Self> {
        let last_name = cell(row, schema.last_name_col);
        let first_name = cell(row, schema.first_name_col);

        if last_name.is_empty() && first_name.is_empty() {
            return None;
        }

        let group = schema
            .group_col
            .map(|col| cell(row, col))
            .unwrap_or_default();

        let mut daily: [String; 6] = Default::default();
        for (slot, &col) in daily.iter_mut().zip(schema.day_cols.iter()) {
            *slot = cell(row, col);
        }

        let total_cell = match schema.totals {
            TotalsMode::TotalColumn(col) => cell(row, col),
            TotalsMode::SumOfDays => String::new(),
        };

        Some(Self {
            last_name,
            first_name,
            group,
            daily,
            total_cell,
        })
    }

    /// Full name as entered in the sheet, tag included.
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn display_name(&self) -> String {
        split_athlete_name(&self.full_name()).0
    }

    pub fn gender(&self) -> Gender {
        split_athlete_name(&self.full_name()).1
    }

    pub fn group_label(&self) -> &str {
        if self.group.is_empty() {
            UNASSIGNED_GROUP
        } else {
            &self.group
        }
    }

    /// Weekly total, from the "Total" column or the summed weekday cells
    /// depending on the sheet revision.
    pub fn total_miles(&self, schema: &SheetSchema) -> f64 {
        match schema.totals {
            TotalsMode::TotalColumn(_) => parse_mileage(&self.total_cell),
            TotalsMode::SumOfDays => self.daily.iter().map(|c| parse_mileage(c)).sum(),
        }
    }
}

/// One relay leg: a team time plus its event label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayLeg {
    pub time: String,
    pub event: String,
}

/// One athlete's results at one named meet. Immutable snapshot; filtered and
/// grouped at view-build time, never mutated.
#[derive(Debug, Clone)]
pub struct RaceResultRow {
    pub name: String,
    pub meet: String,
    /// 800m / 1600m / 3200m cells, verbatim.
    pub events: [String; 3],
    pub relay_legs: Vec<RelayLeg>,
}

impl RaceResultRow {
    pub fn from_row(row: &[String], schema: &SheetSchema) -> Option<Self> {
        let name = cell(row, schema.race_name_col);
        if name.is_empty() {
            return None;
        }

        let mut events: [String; 3] = Default::default();
        for (slot, &col) in events.iter_mut().zip(schema.race_event_cols.iter()) {
            *slot = cell(row, col);
        }

        let relay_legs = schema
            .relay_leg_cols
            .iter()
            .map(|&(time_col, event_col)| RelayLeg {
                time: cell(row, time_col),
                event: cell(row, event_col),
            })
            .collect();

        Some(Self {
            name,
            meet: cell(row, schema.race_meet_col),
            events,
            relay_legs,
        })
    }
}

fn cell(row: &[String], col: usize) -> String {
    row.get(col).map(|c| c.trim().to_string()).unwrap_or_default()
}

/// Materialize attendance rows from one week tab, dropping padding rows.
pub fn parse_attendance_rows(rows: &RowSet, schema: &SheetSchema) -> Vec<AttendanceRow> {
    rows.iter()
        .filter_map(|row| AttendanceRow::from_row(row, schema))
        .collect()
}

/// Materialize race result rows from the race tab.
pub fn parse_race_rows(rows: &RowSet, schema: &SheetSchema) -> Vec<RaceResultRow> {
    rows.iter()
        .filter_map(|row| RaceResultRow::from_row(row, schema))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_split_athlete_name() {
        let (display, gender) = split_athlete_name("Jordan (F)");
        assert_eq!(display, "Jordan");
        assert_eq!(gender, Gender::Girls);

        let (display, gender) = split_athlete_name("Alex Smith");
        assert_eq!(display, "Alex Smith");
        assert_eq!(gender, Gender::Boys);
    }

    #[test]
    fn test_attendance_row_current_schema() {
        let schema = SheetSchema::current();
        let raw = row(&[
            "Smith (F)", "Riley", "Varsity", "5", "6", "A", "4", "", "8", "23",
        ]);

        let parsed = AttendanceRow::from_row(&raw, &schema).expect("row parses");
        assert_eq!(parsed.full_name(), "Riley Smith (F)");
        assert_eq!(parsed.display_name(), "Riley Smith");
        assert_eq!(parsed.gender(), Gender::Girls);
        assert_eq!(parsed.group_label(), "Varsity");
        assert_eq!(parsed.daily[2], "A");
        assert_eq!(parsed.total_miles(&schema), 23.0);
    }

    #[test]
    fn test_attendance_row_legacy_schema_sums_days() {
        let schema = SheetSchema::legacy();
        let raw = row(&["Smith", "Riley", "5", "6", "A", "4", "", "8"]);

        let parsed = AttendanceRow::from_row(&raw, &schema).expect("row parses");
        assert_eq!(parsed.group_label(), UNASSIGNED_GROUP);
        assert_eq!(parsed.total_miles(&schema), 23.0);
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let schema = SheetSchema::current();
        let rows = vec![row(&["", "", "", ""]), row(&["Reyes", "Sam"])];

        let parsed = parse_attendance_rows(&rows, &schema);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].full_name(), "Sam Reyes");
    }

    #[test]
    fn test_race_row_relay_legs_per_schema() {
        let raw = row(&[
            "Reyes",
            "County Invite",
            "2:10.3",
            "",
            "",
            "4:02.1",
            "4x400",
            "1:45.0",
            "4x200",
        ]);

        let current = RaceResultRow::from_row(&raw, &SheetSchema::current()).expect("parses");
        assert_eq!(current.relay_legs.len(), 2);
        assert_eq!(current.relay_legs[1].event, "4x200");

        let legacy = RaceResultRow::from_row(&raw, &SheetSchema::legacy()).expect("parses");
        assert_eq!(legacy.relay_legs.len(), 1);
        assert_eq!(legacy.relay_legs[0].event, "4x400");
    }
}
