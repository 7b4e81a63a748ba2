use crate::values::{is_no_time, parse_race_time};

/// Decide whether a race time counts as a new personal record against the
/// athlete's recorded prior.
///
/// A time equal to the prior still flags: a meet that matches an
/// already-recorded PR keeps its star. Improvement labeling is separate, so
/// the equal case flags with an empty label.
pub fn is_new_personal_record(race_time: &str, prior_pr: &str) -> bool {
    // No valid performance to evaluate.
    if is_no_time(race_time) {
        return false;
    }

    // No recorded history for this event: a debut is always a PR.
    if is_no_time(prior_pr) {
        return true;
    }

    parse_race_time(race_time) <= parse_race_time(prior_pr)
}

/// Improvement label shown next to a flagged PR cell.
///
/// `"(Debut)"` with no prior, `"(-Δs)"` to one decimal when strictly faster,
/// empty when equal or slower. A regression is never rendered as a negative
/// improvement.
pub fn format_improvement(prior_pr: &str, race_time: &str) -> String {
    if is_no_time(race_time) {
        return String::new();
    }

    if is_no_time(prior_pr) {
        return "(Debut)".to_string();
    }

    let delta = parse_race_time(prior_pr) - parse_race_time(race_time);
    if delta > 0.0 {
        format!("(-{:.1}s)", delta)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_race_time_never_flags() {
        for time in ["", "-", "0", " "] {
            for prior in ["", "4:30.5", "--", "270.5"] {
                assert!(
                    !is_new_personal_record(time, prior),
                    "time {:?} prior {:?}",
                    time,
                    prior
                );
            }
        }
    }

    #[test]
    fn test_debut_flags_with_label() {
        for prior in ["", "--", " "] {
            assert!(is_new_personal_record("4:30.5", prior));
            assert_eq!(format_improvement(prior, "4:30.5"), "(Debut)");
        }
    }

    #[test]
    fn test_faster_time_flags_with_delta() {
        assert!(is_new_personal_record("4:28.0", "4:30.5"));
        assert_eq!(format_improvement("4:30.5", "4:28.0"), "(-2.5s)");
    }

    #[test]
    fn test_equal_time_flags_without_label() {
        assert!(is_new_personal_record("4:30.5", "270.5"));
        assert_eq!(format_improvement("270.5", "4:30.5"), "");
    }

    #[test]
    fn test_slower_time_never_flags() {
        assert!(!is_new_personal_record("4:31.0", "4:30.5"));
        assert_eq!(format_improvement("4:30.5", "4:31.0"), "");
    }
}
