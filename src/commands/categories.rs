// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store::{self, CategoryUpdate};
use crate::utils::{maybe_print_json, parse_type, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        Some(("add", sub)) => add(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("reset", _)) => {
            store::reset_categories(conn)?;
            println!("Categories reset to the default set");
        }
        _ => {}
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut cats = store::load_categories(conn)?;
    if let Some(t) = sub.get_one::<String>("type") {
        let t = parse_type(t)?;
        cats.retain(|c| c.r#type == t);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
        let rows: Vec<Vec<String>> = cats
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    format!("{} {}", c.icon, c.name),
                    c.r#type.as_str().to_string(),
                    c.color.clone(),
                    if store::is_default_category(&c.id) {
                        "yes".to_string()
                    } else {
                        "no".to_string()
                    },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Type", "Color", "Default"], rows)
        );
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let r#type = parse_type(sub.get_one::<String>("type").unwrap())?;
    let icon = sub.get_one::<String>("icon").unwrap();
    let color = sub.get_one::<String>("color").unwrap();

    let cat = store::add_category(conn, name, r#type, icon, color)?;
    println!("Added category '{}' ({})", cat.name, cat.id);
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let updates = CategoryUpdate {
        name: sub.get_one::<String>("name").cloned(),
        r#type: match sub.get_one::<String>("type") {
            Some(t) => Some(parse_type(t)?),
            None => None,
        },
        icon: sub.get_one::<String>("icon").cloned(),
        color: sub.get_one::<String>("color").cloned(),
    };
    let cat = store::update_category(conn, id, updates)?;
    println!("Updated category '{}' ({})", cat.name, cat.id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store::delete_category(conn, id)?;
    println!("Removed category '{}'", id);
    Ok(())
}
