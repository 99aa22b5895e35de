use chrono::{Datelike, NaiveDate};

/// Month being shown. `month` is 0-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub month: u32,
    pub year: i32,
}

impl CalendarView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn prev_month(&mut self) {
        if self.month == 0 {
            self.month = 11;
            self.year = self.year.saturating_sub(1);
        } else {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month >= 11 {
            self.month = 0;
            self.year = self.year.saturating_add(1);
        } else {
            self.month += 1;
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub fn month_name(month0: u32) -> &'static str {
    match month0 {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}
