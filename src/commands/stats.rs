// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::Connection;

use crate::dates::{DateRange, month_range, prev_month_reference, prev_year_reference, year_range};
use crate::models::StatisticData;
use crate::stats;
use crate::store;
use crate::utils::{fmt_amount, fmt_compare, maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Current and prior period bounds for a range keyword, relative to `today`.
/// Year granularity compares against the same year's range (see the note on
/// `prev_year_reference`).
pub fn period_ranges(range: &str, today: NaiveDate) -> (DateRange, DateRange) {
    match range {
        "month" => (
            month_range(today),
            month_range(prev_month_reference(today)),
        ),
        "last-month" => {
            let reference = prev_month_reference(today);
            (
                month_range(reference),
                month_range(prev_month_reference(reference)),
            )
        }
        "year" => (year_range(today), year_range(prev_year_reference(today))),
        _ => {
            let reference = prev_year_reference(today);
            (
                year_range(reference),
                year_range(prev_year_reference(reference)),
            )
        }
    }
}

/// Full statistics for a range keyword, shared by `stat summary` and
/// `overview`.
pub fn summary_data(conn: &Connection, range: &str, today: NaiveDate) -> Result<StatisticData> {
    let txns = store::load_transactions(conn)?;
    let cats = store::load_categories(conn)?;
    let (current_range, prior_range) = period_ranges(range, today);
    let current = store::transactions_between(&txns, &current_range);
    let prior = store::transactions_between(&txns, &prior_range);
    Ok(stats::compute_statistics(
        &current, &prior, &txns, &cats, today,
    ))
}

pub fn summary_rows(data: &StatisticData) -> Vec<Vec<String>> {
    vec![
        vec![
            "Income".to_string(),
            fmt_amount(data.total_income),
            fmt_compare(data.income_compare),
        ],
        vec![
            "Expense".to_string(),
            fmt_amount(data.total_expense),
            fmt_compare(data.expense_compare),
        ],
        vec![
            "Net".to_string(),
            fmt_amount(data.net_amount),
            fmt_compare(data.net_amount_compare),
        ],
        vec![
            "Today".to_string(),
            fmt_amount(data.today_expense),
            fmt_compare(data.today_expense_compare),
        ],
    ]
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = sub.get_one::<String>("range").unwrap();
    let today = reference_date(sub)?;

    let data = summary_data(conn, range, today)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Metric", "Amount", "vs prior"], summary_rows(&data))
        );
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = sub.get_one::<String>("range").unwrap();
    let today = reference_date(sub)?;

    let txns = store::load_transactions(conn)?;
    let cats = store::load_categories(conn)?;
    let (current_range, _) = period_ranges(range, today);
    let current = store::transactions_between(&txns, &current_range);
    let data = stats::category_stats(&current, &cats);

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|s| {
                vec![
                    format!("{} {}", s.icon, s.name),
                    fmt_amount(s.amount),
                    format!("{}%", s.percentage),
                    s.count.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share", "Count"], rows)
        );
    }
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap();
    let today = reference_date(sub)?;

    let txns = store::load_transactions(conn)?;
    let data = stats::monthly_trend(&txns, months, today);

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    fmt_amount(m.income),
                    fmt_amount(m.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}
