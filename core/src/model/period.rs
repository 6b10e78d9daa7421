use std::fmt;

use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};

use crate::time::same_week;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A calendar month. `month` is 0-based (0 = January) and always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Out-of-range months roll over into the neighbouring years.
    pub fn new(year: i32, month: i32) -> Self {
        let total = year as i64 * 12 + month as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn shifted(self, delta: i32) -> Self {
        Self::new(self.year, self.month as i32 + delta)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month0() == self.month && date.year() == self.year
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    /// Every calendar day of the month, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(31);
        let mut cursor = self.first_day();
        while let Some(day) = cursor.filter(|d| self.contains(*d)) {
            days.push(day);
            cursor = day.succ_opt();
        }
        days
    }

    /// `YYYY-MM`, 1-based month. Fee records are keyed by this.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month + 1)
    }

    pub fn parse_key(input: &str) -> Result<Self> {
        let (year, month) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", input))?;
        let year: i32 = year.parse().map_err(|_| anyhow!("Invalid year in '{}'", input))?;
        let month: u32 = month.parse().map_err(|_| anyhow!("Invalid month in '{}'", input))?;
        if !(1..=12).contains(&month) {
            return Err(anyhow!("Month must be 1-12, got {}", month));
        }
        Ok(Self { year, month: month - 1 })
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Weekly,
    Monthly,
    All,
}

/// Which attendance marks a ranking looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    kind: PeriodKind,
    month: YearMonth,
    reference_date: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(kind: PeriodKind, month: YearMonth, reference_date: NaiveDate) -> Self {
        Self {
            kind,
            month,
            reference_date,
        }
    }

    pub fn weekly(reference_date: NaiveDate) -> Self {
        Self::new(PeriodKind::Weekly, YearMonth::of(reference_date), reference_date)
    }

    pub fn monthly(month: YearMonth, reference_date: NaiveDate) -> Self {
        Self::new(PeriodKind::Monthly, month, reference_date)
    }

    pub fn all(reference_date: NaiveDate) -> Self {
        Self::new(PeriodKind::All, YearMonth::of(reference_date), reference_date)
    }

    /// 0-based.
    pub fn month(&self) -> u32 {
        self.month.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.kind {
            PeriodKind::Weekly => same_week(date, self.reference_date),
            PeriodKind::Monthly => self.month.contains(date),
            PeriodKind::All => true,
        }
    }
}
