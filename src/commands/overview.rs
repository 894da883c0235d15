// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::dates::format_month;
use crate::stats;
use crate::store;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

use super::stats::{reference_date, summary_data, summary_rows};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let today = reference_date(m)?;

    let data = summary_data(conn, "month", today)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }

    println!("Overview for {}", format_month(today));
    println!(
        "{}",
        pretty_table(&["Metric", "Amount", "vs last month"], summary_rows(&data))
    );

    println!("\nTop expense categories");
    if data.category_stats.is_empty() {
        println!("No categorized expenses yet");
    } else {
        let rows: Vec<Vec<String>> = data
            .category_stats
            .iter()
            .take(5)
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

    let txns = store::load_transactions(conn)?;

    println!("\nRecent transactions");
    let mut recent = store::sorted_by_date(&txns);
    recent.truncate(10);
    if recent.is_empty() {
        println!("No transaction records yet");
    } else {
        let cats = store::load_categories(conn)?;
        let rows: Vec<Vec<String>> = recent
            .iter()
            .map(|t| {
                let category = store::category_by_id(&cats, &t.category)
                    .map(|c| format!("{} {}", c.icon, c.name))
                    .unwrap_or_else(|| t.category.clone());
                vec![
                    t.date.clone(),
                    t.r#type.as_str().to_string(),
                    category,
                    fmt_amount(t.amount),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Amount", "Description"], rows)
        );
    }

    println!(
        "\nAverage daily spending: {}",
        fmt_amount(stats::average_daily_spending(&txns))
    );
    Ok(())
}
