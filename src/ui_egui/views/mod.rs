mod create_view;
mod event_view;
mod week_picker;

pub use create_view::{CreateOutput, CreateViewState};
pub use event_view::{EventAction, EventViewState};

use crate::models::candidate::Candidate;

/// Short human-readable label for a candidate slot, e.g. "Tue 6/4 10:00 - 11:30"
/// or "Tue 6/4 (all day)".
pub(crate) fn format_candidate(candidate: &Candidate) -> String {
    let day = candidate.start_date.format("%a %-m/%-d");
    if candidate.is_all_day {
        format!("{} (all day)", day)
    } else {
        format!(
            "{} {} - {}",
            day,
            candidate.start_date.format("%H:%M"),
            candidate.end_date.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::at_hm;
    use chrono::NaiveDate;

    #[test]
    fn test_format_candidate() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let timed = Candidate::new("c1", at_hm(day, 9, 0), at_hm(day, 10, 30)).unwrap();
        assert_eq!(format_candidate(&timed), "Tue 6/4 09:00 - 10:30");

        let all_day = Candidate::all_day("c2", day);
        assert_eq!(format_candidate(&all_day), "Tue 6/4 (all day)");
    }
}
