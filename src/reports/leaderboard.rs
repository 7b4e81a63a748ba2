use std::cmp::Ordering;
use std::collections::HashMap;

use crate::analytics::{SeasonReport, SeasonTotal};
use crate::domain::Gender;

/// Season leaderboard: descending miles, stable so athletes with equal miles
/// keep their first-seen order.
pub fn season_leaderboard(report: &SeasonReport) -> Vec<&SeasonTotal> {
    let mut ranked: Vec<&SeasonTotal> = report.totals.iter().collect();
    ranked.sort_by(|a, b| b.miles.partial_cmp(&a.miles).unwrap_or(Ordering::Equal));
    ranked
}

#[derive(Debug)]
pub struct GroupLeader<'a> {
    pub gender: Gender,
    pub group: String,
    pub athlete: &'a SeasonTotal,
}

/// Top-mileage athlete per (gender, group). On equal miles the athlete seen
/// first during the fold keeps the spot; a later equal value never replaces.
/// Output is ordered girls first, then group label, for display.
pub fn group_leaders(report: &SeasonReport) -> Vec<GroupLeader<'_>> {
    let mut best: HashMap<(Gender, &str), &SeasonTotal> = HashMap::new();
    let mut seen: Vec<(Gender, &str)> = Vec::new();

    for athlete in &report.totals {
        let key = (athlete.gender, athlete.group.as_str());
        match best.get(&key) {
            Some(current) if athlete.miles <= current.miles => {}
            Some(_) => {
                best.insert(key, athlete);
            }
            None => {
                best.insert(key, athlete);
                seen.push(key);
            }
        }
    }

    seen.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    seen.into_iter()
        .map(|key| GroupLeader {
            gender: key.0,
            group: key.1.to_string(),
            athlete: best[&key],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn athlete(name: &str, gender: Gender, group: &str, miles: f64) -> SeasonTotal {
        let mut total = SeasonTotal::new(
            name.to_string(),
            name.to_string(),
            gender,
            group.to_string(),
        );
        total.miles = miles;
        total
    }

    fn report(totals: Vec<SeasonTotal>) -> SeasonReport {
        SeasonReport {
            totals,
            team_miles: 0.0,
            total_absences: 0,
            total_active_days: 0,
            weeks_processed: 0,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_leaderboard_orders_by_miles_descending() {
        let report = report(vec![
            athlete("Kim", Gender::Boys, "JV", 30.0),
            athlete("Reyes", Gender::Boys, "JV", 45.0),
            athlete("Cole", Gender::Boys, "JV", 40.0),
        ]);

        let ranked = season_leaderboard(&report);
        let names: Vec<&str> = ranked.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Reyes", "Cole", "Kim"]);
    }

    #[test]
    fn test_leaderboard_ties_keep_input_order() {
        let report = report(vec![
            athlete("Kim", Gender::Boys, "JV", 40.0),
            athlete("Reyes", Gender::Boys, "JV", 40.0),
            athlete("Cole", Gender::Boys, "JV", 50.0),
        ]);

        let ranked = season_leaderboard(&report);
        let names: Vec<&str> = ranked.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Cole", "Kim", "Reyes"]);
    }

    #[test]
    fn test_group_leader_first_max_wins() {
        let report = report(vec![
            athlete("Kim", Gender::Girls, "Varsity", 40.0),
            athlete("Ruiz", Gender::Girls, "Varsity", 40.0),
            athlete("Cole", Gender::Boys, "Varsity", 35.0),
        ]);

        let leaders = group_leaders(&report);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].gender, Gender::Girls);
        assert_eq!(leaders[0].athlete.name, "Kim");
        assert_eq!(leaders[1].athlete.name, "Cole");
    }

    #[test]
    fn test_group_leader_strictly_greater_replaces() {
        let report = report(vec![
            athlete("Kim", Gender::Girls, "JV", 30.0),
            athlete("Ruiz", Gender::Girls, "JV", 31.0),
        ]);

        let leaders = group_leaders(&report);
        assert_eq!(leaders[0].athlete.name, "Ruiz");
    }
}
