use std::cmp::Ordering;

use crate::records::{PrEvent, PrRecord, PrRegistry};
use crate::values::{NO_TIME_SECS, parse_race_time};

/// Toggle-sort state for the PR table: selecting the active column flips the
/// direction, selecting a new column resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<PrEvent>,
    pub ascending: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, column: PrEvent) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
    }
}

/// Sorted/filtered view over the registry. The filter always runs against
/// the full registry, never a previous view, so successive filters replace
/// rather than compose. Rows without a time for the sort column go last in
/// both directions.
pub fn pr_table_view<'a>(
    registry: &'a PrRegistry,
    sort: &SortState,
    filter: Option<&str>,
) -> Vec<&'a PrRecord> {
    let needle = filter.map(|f| f.trim().to_lowercase()).unwrap_or_default();

    let mut rows: Vec<&PrRecord> = registry
        .records()
        .iter()
        .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
        .collect();

    if let Some(event) = sort.column {
        rows.sort_by(|a, b| compare_times(a.time_for(event), b.time_for(event), sort.ascending));
    }

    rows
}

fn compare_times(a: &str, b: &str, ascending: bool) -> Ordering {
    let (secs_a, secs_b) = (parse_race_time(a), parse_race_time(b));

    // Missing times sort last regardless of direction.
    match (secs_a >= NO_TIME_SECS, secs_b >= NO_TIME_SECS) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = secs_a.partial_cmp(&secs_b).unwrap_or(Ordering::Equal);
            if ascending { ordering } else { ordering.reverse() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetSchema;
    use crate::domain::RowSet;

    fn registry(data: &[&[&str]]) -> PrRegistry {
        let rows: RowSet = data
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        PrRegistry::from_rows(&rows, &SheetSchema::current())
    }

    fn names(rows: &[&PrRecord]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    fn fixture() -> PrRegistry {
        registry(&[
            &["Reyes", "2:10.0", "4:50.0", "--"],
            &["Kim (F)", "2:25.0", "5:10.3", "11:40.0"],
            &["Cole", "2:05.5", "--", "10:55.2"],
        ])
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let mut sort = SortState::new();
        sort.toggle(PrEvent::M800);
        assert_eq!(sort.column, Some(PrEvent::M800));
        assert!(sort.ascending);

        sort.toggle(PrEvent::M800);
        assert!(!sort.ascending);

        sort.toggle(PrEvent::M1600);
        assert_eq!(sort.column, Some(PrEvent::M1600));
        assert!(sort.ascending);
    }

    #[test]
    fn test_toggle_round_trip_restores_ordering() {
        let registry = fixture();
        let mut sort = SortState::new();

        sort.toggle(PrEvent::M800);
        let first = names(&pr_table_view(&registry, &sort, None));

        sort.toggle(PrEvent::M800);
        let second = names(&pr_table_view(&registry, &sort, None));
        assert_ne!(first, second);

        sort.toggle(PrEvent::M800);
        let third = names(&pr_table_view(&registry, &sort, None));
        assert_eq!(first, third);
    }

    #[test]
    fn test_missing_times_sort_last_both_directions() {
        let registry = fixture();
        let mut sort = SortState::new();
        sort.toggle(PrEvent::M1600);

        let ascending = names(&pr_table_view(&registry, &sort, None));
        assert_eq!(ascending, vec!["Reyes", "Kim (F)", "Cole"]);

        sort.toggle(PrEvent::M1600);
        let descending = names(&pr_table_view(&registry, &sort, None));
        assert_eq!(descending, vec!["Kim (F)", "Reyes", "Cole"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let registry = fixture();
        let sort = SortState::new();

        let view = pr_table_view(&registry, &sort, Some("kIm"));
        assert_eq!(names(&view), vec!["Kim (F)"]);
    }

    #[test]
    fn test_filter_always_runs_against_full_registry() {
        let registry = fixture();
        let sort = SortState::new();

        let narrowed = pr_table_view(&registry, &sort, Some("Kim"));
        assert_eq!(narrowed.len(), 1);

        // A later filter sees every record again, not the narrowed view.
        let replaced = pr_table_view(&registry, &sort, Some("e"));
        assert_eq!(names(&replaced), vec!["Reyes", "Cole"]);

        let cleared = pr_table_view(&registry, &sort, None);
        assert_eq!(cleared.len(), 3);
    }
}
