use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate};
use shared_types::DateWindow;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How far ahead the reserved-dates query looks.
pub const AVAILABILITY_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .map(|next| next.signed_duration_since(first).num_days() as u32)
            .unwrap_or(31)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Dates already reserved by other applicants, as of the last fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySnapshot {
    reserved: BTreeSet<NaiveDate>,
}

impl AvailabilitySnapshot {
    pub fn new(reserved: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            reserved: reserved.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_reserved(&self, date: NaiveDate) -> bool {
        self.reserved.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }

    /// The window fetched on entry to the scheduling step: today through six months ahead.
    pub fn window(today: NaiveDate) -> DateWindow {
        DateWindow {
            from: today,
            to: today
                .checked_add_months(Months::new(AVAILABILITY_MONTHS))
                .unwrap_or(today),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Strictly before today.
    Past,
    Booked,
    Today,
    Open,
}

impl DayStatus {
    pub fn is_selectable(self) -> bool {
        matches!(self, DayStatus::Today | DayStatus::Open)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DayStatus::Past => "calendar-day disabled",
            DayStatus::Booked => "calendar-day booked",
            DayStatus::Today => "calendar-day today",
            DayStatus::Open => "calendar-day",
        }
    }
}

pub fn day_status(date: NaiveDate, today: NaiveDate, snapshot: &AvailabilitySnapshot) -> DayStatus {
    if date < today {
        DayStatus::Past
    } else if snapshot.is_reserved(date) {
        DayStatus::Booked
    } else if date == today {
        DayStatus::Today
    } else {
        DayStatus::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { date: NaiveDate, status: DayStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn label(&self) -> String {
        self.month.label()
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, CalendarCell::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, DayStatus)> + '_ {
        self.cells.iter().filter_map(|cell| match cell {
            CalendarCell::Day { date, status } => Some((*date, *status)),
            CalendarCell::Blank => None,
        })
    }
}

/// Builds the grid for `month`. Statuses are always derived from `today` and the snapshot,
/// never from a previously rendered month.
pub fn month_grid(month: YearMonth, today: NaiveDate, snapshot: &AvailabilitySnapshot) -> MonthGrid {
    let offset = month.first_day().weekday().num_days_from_sunday() as usize;
    let mut cells = vec![CalendarCell::Blank; offset];

    cells.extend((1..=month.days_in_month()).filter_map(|day| {
        month.day(day).map(|date| CalendarCell::Day {
            date,
            status: day_status(date, today, snapshot),
        })
    }));

    MonthGrid { month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_navigation_wraps_years() {
        let january = YearMonth::new(2026, 1).unwrap();
        assert_eq!(january.previous(), YearMonth::new(2025, 12).unwrap());

        let december = YearMonth::new(2026, 12).unwrap();
        assert_eq!(december.next(), YearMonth::new(2027, 1).unwrap());
        assert!(YearMonth::new(2026, 13).is_none());
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2026, 10).unwrap().days_in_month(), 31);
        assert_eq!(YearMonth::new(2026, 11).unwrap().days_in_month(), 30);
    }

    #[test]
    fn grid_offsets_by_first_weekday() {
        // 1 October 2026 is a Thursday.
        let grid = month_grid(
            YearMonth::new(2026, 10).unwrap(),
            date(2026, 10, 19),
            &AvailabilitySnapshot::empty(),
        );
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.cells.len(), 4 + 31);
        assert_eq!(grid.label(), "October 2026");
    }

    #[test]
    fn past_beats_booked_and_booked_beats_today() {
        let today = date(2026, 10, 19);
        let snapshot = AvailabilitySnapshot::new([date(2026, 10, 10), today, date(2026, 10, 25)]);

        assert_eq!(day_status(date(2026, 10, 10), today, &snapshot), DayStatus::Past);
        assert_eq!(day_status(today, today, &snapshot), DayStatus::Booked);
        assert_eq!(day_status(date(2026, 10, 25), today, &snapshot), DayStatus::Booked);
        assert_eq!(day_status(date(2026, 10, 26), today, &snapshot), DayStatus::Open);
        assert_eq!(
            day_status(today, today, &AvailabilitySnapshot::empty()),
            DayStatus::Today
        );
    }

    #[test]
    fn availability_window_spans_six_months() {
        let window = AvailabilitySnapshot::window(date(2026, 10, 19));
        assert_eq!(window.from, date(2026, 10, 19));
        assert_eq!(window.to, date(2027, 4, 19));
    }
}
