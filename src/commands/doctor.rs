// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;
use crate::utils::{is_valid_amount, is_valid_date, pretty_table};

pub fn handle(conn: &Connection) -> Result<()> {
    let txns = store::load_transactions(conn)?;
    let cats = store::load_categories(conn)?;

    let mut rows = Vec::new();
    for t in &txns {
        // Dangling ids keep counting toward totals but never show up in the
        // category breakdown.
        if store::category_by_id(&cats, &t.category).is_none() {
            rows.push(vec![
                "dangling_category".to_string(),
                format!("{} '{}' ({})", t.date, t.category, t.id),
            ]);
        }
        if !is_valid_date(&t.date) {
            rows.push(vec![
                "invalid_date".to_string(),
                format!("'{}' ({})", t.date, t.id),
            ]);
        }
        if !is_valid_amount(t.amount) {
            rows.push(vec![
                "invalid_amount".to_string(),
                format!("{} ({})", t.amount, t.id),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
