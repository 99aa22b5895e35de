use chrono::{Datelike, NaiveDate};

use super::view::CalendarView;

pub const MAX_WEEKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCell {
    pub day: Option<u32>,
    pub today: bool,
}

/// Sunday-first weeks of one month. Only rows holding at least one day
/// are kept, so there are between four and six.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthGrid {
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthGrid {
    pub fn build(view: CalendarView, today: NaiveDate) -> Self {
        let Some(first) = NaiveDate::from_ymd_opt(view.year, view.month + 1, 1) else {
            return Self::default();
        };
        let Some(days) = days_in_month(view.year, view.month + 1) else {
            return Self::default();
        };
        let first_weekday = first.weekday().num_days_from_sunday() as usize;
        let today_day = (today.year() == view.year && today.month0() == view.month)
            .then(|| today.day());

        let mut weeks = Vec::with_capacity(MAX_WEEKS);
        let mut date = 1;
        for row in 0..MAX_WEEKS {
            let mut week = [DayCell::default(); 7];
            for (col, cell) in week.iter_mut().enumerate() {
                if (row == 0 && col < first_weekday) || date > days {
                    continue;
                }
                *cell = DayCell {
                    day: Some(date),
                    today: today_day == Some(date),
                };
                date += 1;
            }
            weeks.push(week);
            if date > days {
                break;
            }
        }

        Self { weeks }
    }

    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter(|cell| cell.day.is_some())
            .count()
    }
}

/// `month` is 1-based here, as chrono counts.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn february_leap_and_common_years() {
        let today = date(2000, 1, 1);
        let leap = MonthGrid::build(CalendarView { month: 1, year: 2024 }, today);
        let common = MonthGrid::build(CalendarView { month: 1, year: 2023 }, today);
        assert_eq!(leap.day_count(), 29);
        assert_eq!(common.day_count(), 28);
    }

    #[test]
    fn leading_cells_are_empty_until_first_weekday() {
        // 2026-10-01 is a Thursday.
        let grid = MonthGrid::build(CalendarView { month: 9, year: 2026 }, date(2000, 1, 1));
        let first_week = &grid.weeks[0];
        assert!(first_week[..4].iter().all(|c| c.day.is_none()));
        assert_eq!(first_week[4].day, Some(1));
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[4][6].day, Some(31));
    }

    #[test]
    fn rows_stop_once_days_are_placed() {
        // February 2015 starts on Sunday and fills exactly four weeks.
        let grid = MonthGrid::build(CalendarView { month: 1, year: 2015 }, date(2000, 1, 1));
        assert_eq!(grid.weeks.len(), 4);

        // August 2026 starts on Saturday and spills into a sixth row.
        let grid = MonthGrid::build(CalendarView { month: 7, year: 2026 }, date(2000, 1, 1));
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.weeks[5][1].day, Some(31));
        assert!(grid.weeks[5][2..].iter().all(|c| c.day.is_none()));
    }

    #[test]
    fn only_todays_cell_is_marked() {
        let grid = MonthGrid::build(CalendarView { month: 9, year: 2026 }, date(2026, 10, 16));
        let marked: Vec<u32> = grid
            .weeks
            .iter()
            .flat_map(|w| w.iter())
            .filter(|c| c.today)
            .filter_map(|c| c.day)
            .collect();
        assert_eq!(marked, vec![16]);

        let other = MonthGrid::build(CalendarView { month: 9, year: 2025 }, date(2026, 10, 16));
        assert!(other.weeks.iter().flat_map(|w| w.iter()).all(|c| !c.today));
    }

    #[test]
    fn out_of_range_year_renders_empty() {
        let grid = MonthGrid::build(CalendarView { month: 0, year: i32::MAX }, date(2000, 1, 1));
        assert!(grid.weeks.is_empty());
    }
}
