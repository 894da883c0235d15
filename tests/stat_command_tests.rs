// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use outgo::commands::stats as stat_cmd;
use outgo::models::TxnType;
use outgo::store::NewTransaction;
use outgo::{db, store};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn spend(conn: &Connection, amount: f64, date: &str) {
    store::add_transaction(
        conn,
        NewTransaction {
            r#type: TxnType::Expense,
            category: "food".to_string(),
            amount,
            date: date.to_string(),
            description: String::new(),
        },
    )
    .unwrap();
}

#[test]
fn month_ranges_pair_with_previous_month() {
    let (current, prior) = stat_cmd::period_ranges("month", day("2024-03-10"));
    assert_eq!(current.start, "2024-03-01");
    assert_eq!(current.end, "2024-03-31");
    assert_eq!(prior.start, "2024-02-01");
    assert_eq!(prior.end, "2024-02-29");

    let (current, prior) = stat_cmd::period_ranges("last-month", day("2024-03-10"));
    assert_eq!(current.start, "2024-02-01");
    assert_eq!(current.end, "2024-02-29");
    assert_eq!(prior.start, "2024-01-01");
    assert_eq!(prior.end, "2024-01-31");
}

#[test]
fn year_view_compares_the_year_with_itself() {
    // Pins the inherited baseline: both ranges cover the same calendar year.
    let (current, prior) = stat_cmd::period_ranges("year", day("2024-06-15"));
    assert_eq!(current, prior);
    assert_eq!(current.start, "2024-01-01");
    assert_eq!(current.end, "2024-12-31");

    let (current, prior) = stat_cmd::period_ranges("last-year", day("2024-06-15"));
    assert_eq!(current, prior);
    assert_eq!(current.start, "2024-01-01");
}

#[test]
fn summary_restricts_totals_to_the_period() {
    let conn = setup();
    spend(&conn, 100.0, "2024-01-10");
    spend(&conn, 150.0, "2024-02-10");

    let data = stat_cmd::summary_data(&conn, "month", day("2024-02-15")).unwrap();
    assert_eq!(data.total_expense, 150.0);
    assert_eq!(data.expense_compare, 50.0);

    // The trend window ignores the period filter.
    let january = data
        .monthly_trend
        .iter()
        .find(|m| m.month == "01/2024")
        .unwrap();
    assert_eq!(january.expense, 100.0);
}

#[test]
fn year_summary_reports_no_change_against_itself() {
    let conn = setup();
    spend(&conn, 80.0, "2024-04-01");

    let data = stat_cmd::summary_data(&conn, "year", day("2024-06-15")).unwrap();
    assert_eq!(data.total_expense, 80.0);
    assert_eq!(data.expense_compare, 0.0);
    assert_eq!(data.income_compare, 0.0);
}

#[test]
fn zero_income_in_both_periods_reads_as_flat() {
    let conn = setup();
    spend(&conn, 10.0, "2024-02-05");

    let data = stat_cmd::summary_data(&conn, "month", day("2024-02-15")).unwrap();
    assert_eq!(data.total_income, 0.0);
    assert_eq!(data.income_compare, 0.0);
}
