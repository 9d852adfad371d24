use chrono::NaiveDate;

const CUTOFF_MONTH: u32 = 8;
const CUTOFF_DAY: u32 = 1;
const DAYS_PER_YEAR: f64 = 365.25;

pub const MIN_STUDY_YEAR: i32 = 1;
pub const MAX_STUDY_YEAR: i32 = 6;

/// Current study year for a student admitted in `admission_year`, as of
/// `today`. The academic year rolls over on August 1: elapsed days since the
/// cutoff are converted to fractional years, truncated toward zero, and
/// offset by one so a student is in year 1 throughout their admission year.
/// The result is clamped to [1, 6], which also bounds the output for
/// corrupted or far-off admission years.
pub fn study_year(admission_year: i32, today: NaiveDate) -> i32 {
    let cutoff = match NaiveDate::from_ymd_opt(admission_year, CUTOFF_MONTH, CUTOFF_DAY) {
        Some(date) => date,
        // Outside chrono's representable calendar; the clamp floor applies.
        None => return MIN_STUDY_YEAR,
    };

    let elapsed_years = (today - cutoff).num_days() as f64 / DAYS_PER_YEAR;
    let year = elapsed_years as i32 + 1;
    year.clamp(MIN_STUDY_YEAR, MAX_STUDY_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn admission_year_counts_as_year_one() {
        assert_eq!(study_year(2023, date(2023, 8, 1)), 1);
        assert_eq!(study_year(2023, date(2024, 3, 1)), 1);
    }

    #[test]
    fn advances_one_year_past_each_cutoff() {
        assert_eq!(study_year(2023, date(2024, 8, 2)), 2);
        assert_eq!(study_year(2023, date(2026, 9, 15)), 4);
    }

    #[test]
    fn dates_before_the_cutoff_stay_at_the_floor() {
        assert_eq!(study_year(2025, date(2024, 8, 7)), 1);
        assert_eq!(study_year(2025, date(2025, 7, 31)), 1);
    }

    #[test]
    fn clamps_to_bounds_for_implausible_years() {
        assert_eq!(study_year(1900, date(2025, 1, 1)), MAX_STUDY_YEAR);
        assert_eq!(study_year(2999, date(2025, 1, 1)), MIN_STUDY_YEAR);
    }

    #[test]
    fn non_decreasing_as_today_advances() {
        let mut previous = 0;
        let mut today = date(2022, 1, 1);
        for _ in 0..80 {
            let year = study_year(2023, today);
            assert!(year >= previous);
            assert!((MIN_STUDY_YEAR..=MAX_STUDY_YEAR).contains(&year));
            previous = year;
            today = today + chrono::Duration::days(90);
        }
        assert_eq!(previous, MAX_STUDY_YEAR);
    }
}
