//! Month grid model for the single-date calendar.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Cells per rendered week row.
pub const DAYS_PER_WEEK: usize = 7;
/// Week rows per rendered month; fixed so the widget height never jumps.
pub const WEEKS_PER_GRID: usize = 6;

const SHORT_WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One cell of the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    /// Date shown in the cell.
    pub date: NaiveDate,
    /// Belongs to the previous or next month.
    pub outside: bool,
    /// Equals the supplied "today".
    pub today: bool,
    /// Equals the current selection.
    pub selected: bool,
}

/// Six week rows starting on the configured weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    /// Week rows, each `DAYS_PER_WEEK` long.
    pub weeks: Vec<Vec<CalendarDay>>,
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move `month` by `delta` months, landing on the first of the month.
///
/// Out-of-range moves leave the month unchanged.
#[must_use]
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(month);
    let step = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(step)
    } else {
        first.checked_sub_months(step)
    };
    shifted.unwrap_or(first)
}

fn offset_from(day: Weekday, week_start: Weekday) -> u32 {
    (day.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// Weekday header labels starting at `week_start`.
#[must_use]
pub fn weekday_labels(week_start: Weekday) -> [&'static str; DAYS_PER_WEEK] {
    let mut labels = SHORT_WEEKDAYS;
    labels.rotate_left(week_start.num_days_from_sunday() as usize);
    labels
}

/// Build the grid for the month containing `month`.
#[must_use]
pub fn month_grid(
    month: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    week_start: Weekday,
) -> MonthGrid {
    let first = first_of_month(month);
    let lead = offset_from(first.weekday(), week_start);
    let start = first
        .checked_sub_days(Days::new(u64::from(lead)))
        .unwrap_or(first);
    let days: Vec<CalendarDay> = start
        .iter_days()
        .take(DAYS_PER_WEEK * WEEKS_PER_GRID)
        .map(|date| CalendarDay {
            date,
            outside: date.month() != first.month() || date.year() != first.year(),
            today: date == today,
            selected: selected == Some(date),
        })
        .collect();
    let weeks = days
        .chunks(DAYS_PER_WEEK)
        .map(<[CalendarDay]>::to_vec)
        .collect();
    MonthGrid {
        month: first,
        weeks,
    }
}

/// Caption such as `"September 2024"`.
#[must_use]
pub fn caption(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// Accessible label such as `"Tuesday, September 3, 2024"`.
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// ISO `YYYY-MM-DD` key used for `data-day` attributes.
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn grid_is_six_full_weeks() {
        let grid = month_grid(date(2024, 9, 15), date(2024, 9, 3), None, Weekday::Sun);
        assert_eq!(grid.weeks.len(), WEEKS_PER_GRID);
        assert!(grid.weeks.iter().all(|week| week.len() == DAYS_PER_WEEK));
        assert_eq!(grid.month, date(2024, 9, 1));
    }

    #[test]
    fn leading_and_trailing_days_are_outside() {
        // 2024-10-01 is a Tuesday.
        let grid = month_grid(date(2024, 10, 1), date(2024, 1, 1), None, Weekday::Sun);
        let first_week = &grid.weeks[0];
        assert_eq!(first_week[0].date, date(2024, 9, 29));
        assert!(first_week[0].outside);
        assert!(first_week[1].outside);
        assert!(!first_week[2].outside);
        assert_eq!(first_week[2].date, date(2024, 10, 1));
        let last = grid.weeks[5][6];
        assert_eq!(last.date, date(2024, 11, 9));
        assert!(last.outside);
    }

    #[test]
    fn monday_start_shifts_the_grid() {
        let grid = month_grid(date(2024, 10, 1), date(2024, 1, 1), None, Weekday::Mon);
        assert_eq!(grid.weeks[0][0].date, date(2024, 9, 30));
        assert_eq!(weekday_labels(Weekday::Mon)[0], "Mo");
        assert_eq!(weekday_labels(Weekday::Mon)[6], "Su");
    }

    #[test]
    fn today_and_selected_flags() {
        let grid = month_grid(
            date(2024, 2, 1),
            date(2024, 2, 14),
            Some(date(2024, 2, 29)),
            Weekday::Sun,
        );
        let days: Vec<_> = grid.weeks.iter().flatten().collect();
        assert_eq!(days.iter().filter(|day| day.today).count(), 1);
        let selected: Vec<_> = days.iter().filter(|day| day.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 2, 29));
    }

    #[test]
    fn month_navigation_clamps_to_first_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 1));
        assert_eq!(shift_month(date(2024, 1, 31), -1), date(2023, 12, 1));
        assert_eq!(shift_month(date(2024, 5, 5), 0), date(2024, 5, 1));
    }

    #[test]
    fn labels() {
        assert_eq!(caption(date(2024, 9, 3)), "September 2024");
        assert_eq!(day_label(date(2024, 9, 3)), "Tuesday, September 3, 2024");
        assert_eq!(day_key(date(2024, 9, 3)), "2024-09-03");
    }
}
