// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Local;
use rusqlite::Connection;

use crate::dates::format_date_iso;
use crate::models::{FilterOptions, Transaction};
use crate::store::{self, NewTransaction, TxnUpdate};
use crate::utils::{fmt_amount, maybe_print_json, parse_amount, parse_type, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("clear", sub)) => clear(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let r#type = parse_type(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => s.clone(),
        None => format_date_iso(Local::now().date_naive()),
    };
    let category_arg = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("desc").unwrap().clone();

    let cats = store::load_categories(conn)?;
    let Some(category) = store::resolve_category(&cats, category_arg) else {
        bail!("Category '{}' not found", category_arg);
    };

    let txn = store::add_transaction(
        conn,
        NewTransaction {
            r#type,
            category: category.id.clone(),
            amount,
            date,
            description,
        },
    )?;
    println!(
        "Recorded {} {} on {} ({} {})",
        txn.r#type.as_str(),
        fmt_amount(txn.amount),
        txn.date,
        category.icon,
        category.name
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let cats = store::load_categories(conn)?;
        let rows: Vec<Vec<String>> = data
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
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Amount", "Description", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

/// Filtered, newest-first transaction listing for the `tx list` flags.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut filters = FilterOptions::default();

    if let Some(t) = sub.get_one::<String>("type") {
        filters.r#type = Some(parse_type(t)?);
    }
    if let Some(vals) = sub.get_many::<String>("category") {
        let cats = store::load_categories(conn)?;
        filters.categories = vals
            .map(|v| {
                store::resolve_category(&cats, v)
                    .map(|c| c.id.clone())
                    .unwrap_or_else(|| v.clone())
            })
            .collect();
    }
    if let (Some(from), Some(to)) = (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        filters.date_range = Some((from.clone(), to.clone()));
    }
    let min = sub.get_one::<f64>("min").copied().unwrap_or(0.0);
    let max = sub.get_one::<f64>("max").copied().unwrap_or(0.0);
    if min > 0.0 || max > 0.0 {
        filters.amount_range = Some((min, max));
    }
    if let Some(term) = sub.get_one::<String>("search") {
        filters.search_term = Some(term.clone());
    }

    let txns = store::load_transactions(conn)?;
    let mut rows = store::sorted_by_date(&store::filter_transactions(&txns, &filters));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut updates = TxnUpdate::default();

    if let Some(t) = sub.get_one::<String>("type") {
        updates.r#type = Some(parse_type(t)?);
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        updates.amount = Some(parse_amount(a)?);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        updates.date = Some(d.clone());
    }
    if let Some(c) = sub.get_one::<String>("category") {
        let cats = store::load_categories(conn)?;
        let Some(category) = store::resolve_category(&cats, c) else {
            bail!("Category '{}' not found", c);
        };
        updates.category = Some(category.id.clone());
    }
    if let Some(desc) = sub.get_one::<String>("desc") {
        updates.description = Some(desc.clone());
    }

    let txn = store::update_transaction(conn, id, updates)?;
    println!(
        "Updated {} ({} {} on {})",
        txn.id,
        txn.r#type.as_str(),
        fmt_amount(txn.amount),
        txn.date
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store::delete_transaction(conn, id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

fn clear(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("force") {
        bail!("This deletes every transaction; pass --force to proceed");
    }
    store::delete_all_transactions(conn)?;
    println!("All transactions deleted");
    Ok(())
}
