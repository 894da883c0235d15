// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Inclusive calendar range, both bounds as ISO YYYY-MM-DD strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%m/%Y").to_string()
}

/// Month key (MM/yyyy) for a stored date string, `None` when it does not
/// parse as a calendar date.
pub fn month_key(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(format_month)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first day of month")
}

pub fn month_range(date: NaiveDate) -> DateRange {
    let start = first_of_month(date);
    let end = start + Months::new(1) - Duration::days(1);
    DateRange {
        start: format_date_iso(start),
        end: format_date_iso(end),
    }
}

pub fn year_range(date: NaiveDate) -> DateRange {
    let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("january 1st");
    let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).expect("december 31st");
    DateRange {
        start: format_date_iso(start),
        end: format_date_iso(end),
    }
}

/// Reference date for the month preceding `date`'s month; the year rolls
/// over when `date` falls in January.
pub fn prev_month_reference(date: NaiveDate) -> NaiveDate {
    first_of_month(date) - Months::new(1)
}

// TODO: the previous-year baseline points at January 1 of the same calendar
// year, so a year view ends up compared against itself; revisit the window.
pub fn prev_year_reference(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("january 1st")
}

/// The last `count` month keys, newest first, starting at `reference`'s
/// month. Callers reverse for chronological order.
pub fn last_months(count: usize, reference: NaiveDate) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    let mut cursor = first_of_month(reference);
    for _ in 0..count {
        out.push(format_month(cursor));
        cursor = cursor - Months::new(1);
    }
    out
}
