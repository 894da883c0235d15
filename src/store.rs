// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rusqlite::Connection;
use thiserror::Error;

use crate::dates::DateRange;
use crate::db::{kv_get, kv_set};
use crate::models::{Category, FilterOptions, Transaction, TxnType};
use crate::utils::{generate_id, is_valid_amount, is_valid_date, now_millis, sanitize_search_term};

pub const TXNS_KEY: &str = "transactions";
pub const CATS_KEY: &str = "categories";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid amount {0}: must be a non-negative number")]
    InvalidAmount(f64),
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("no transaction with id '{0}'")]
    UnknownTransaction(String),
    #[error("no category with id '{0}'")]
    UnknownCategory(String),
    #[error("category '{0}' belongs to the default set and cannot be changed")]
    DefaultCategory(String),
}

fn builtin(id: &str, name: &str, r#type: TxnType, icon: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        r#type,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// Fixed default set seeded on first run. Immutable and non-deletable by
/// policy; the statistics engine treats these like any other category.
pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        builtin("food", "Food", TxnType::Expense, "🍔", "#F97316"),
        builtin("transport", "Transport", TxnType::Expense, "🚌", "#3B82F6"),
        builtin("housing", "Housing", TxnType::Expense, "🏠", "#8B5CF6"),
        builtin("shopping", "Shopping", TxnType::Expense, "🛍️", "#EC4899"),
        builtin(
            "entertainment",
            "Entertainment",
            TxnType::Expense,
            "🎮",
            "#EF4444",
        ),
        builtin("health", "Health", TxnType::Expense, "💊", "#10B981"),
        builtin("education", "Education", TxnType::Expense, "📚", "#6366F1"),
        builtin("work", "Work", TxnType::Expense, "💼", "#FBBF24"),
        builtin("travel", "Travel", TxnType::Expense, "✈️", "#06B6D4"),
        builtin(
            "other-expense",
            "Other Expense",
            TxnType::Expense,
            "🏦",
            "#6B7280",
        ),
        builtin("salary", "Salary", TxnType::Income, "💰", "#10B981"),
        builtin("gift", "Gift", TxnType::Income, "🎁", "#F59E0B"),
        builtin("investment", "Investment", TxnType::Income, "📈", "#3B82F6"),
        builtin("side-income", "Side Income", TxnType::Income, "🤝", "#8B5CF6"),
        builtin("other-income", "Other Income", TxnType::Income, "✨", "#6B7280"),
    ]
});

pub fn is_default_category(id: &str) -> bool {
    DEFAULT_CATEGORIES.iter().any(|c| c.id == id)
}

pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    match kv_get(conn, TXNS_KEY)? {
        Some(raw) => serde_json::from_str(&raw).context("Parse stored transactions"),
        None => Ok(Vec::new()),
    }
}

pub fn save_transactions(conn: &Connection, txns: &[Transaction]) -> Result<()> {
    let raw = serde_json::to_string(txns).context("Serialize transactions")?;
    kv_set(conn, TXNS_KEY, &raw)
}

/// Loads the category list, seeding the defaults the first time around.
pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    match kv_get(conn, CATS_KEY)? {
        Some(raw) => serde_json::from_str(&raw).context("Parse stored categories"),
        None => {
            let defaults = DEFAULT_CATEGORIES.clone();
            save_categories(conn, &defaults)?;
            Ok(defaults)
        }
    }
}

pub fn save_categories(conn: &Connection, cats: &[Category]) -> Result<()> {
    let raw = serde_json::to_string(cats).context("Serialize categories")?;
    kv_set(conn, CATS_KEY, &raw)
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub r#type: TxnType,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
}

fn validate_amount(v: f64) -> Result<()> {
    if !is_valid_amount(v) {
        return Err(StoreError::InvalidAmount(v).into());
    }
    Ok(())
}

fn validate_date(s: &str) -> Result<()> {
    if !is_valid_date(s) {
        return Err(StoreError::InvalidDate(s.to_string()).into());
    }
    Ok(())
}

pub fn add_transaction(conn: &Connection, new: NewTransaction) -> Result<Transaction> {
    validate_amount(new.amount)?;
    validate_date(&new.date)?;

    let now = now_millis();
    let txn = Transaction {
        id: generate_id(),
        r#type: new.r#type,
        category: new.category,
        amount: new.amount,
        date: new.date,
        description: new.description,
        created_at: now,
        updated_at: now,
    };

    let mut txns = load_transactions(conn)?;
    // Newest entries live at the front of the stored list.
    txns.insert(0, txn.clone());
    save_transactions(conn, &txns)?;
    Ok(txn)
}

#[derive(Debug, Clone, Default)]
pub struct TxnUpdate {
    pub r#type: Option<TxnType>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

pub fn update_transaction(conn: &Connection, id: &str, updates: TxnUpdate) -> Result<Transaction> {
    if let Some(amount) = updates.amount {
        validate_amount(amount)?;
    }
    if let Some(ref date) = updates.date {
        validate_date(date)?;
    }

    let mut txns = load_transactions(conn)?;
    let txn = txns
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| StoreError::UnknownTransaction(id.to_string()))?;

    if let Some(t) = updates.r#type {
        txn.r#type = t;
    }
    if let Some(category) = updates.category {
        txn.category = category;
    }
    if let Some(amount) = updates.amount {
        txn.amount = amount;
    }
    if let Some(date) = updates.date {
        txn.date = date;
    }
    if let Some(description) = updates.description {
        txn.description = description;
    }
    txn.updated_at = now_millis();

    let updated = txn.clone();
    save_transactions(conn, &txns)?;
    Ok(updated)
}

pub fn delete_transaction(conn: &Connection, id: &str) -> Result<()> {
    let mut txns = load_transactions(conn)?;
    let before = txns.len();
    txns.retain(|t| t.id != id);
    if txns.len() == before {
        return Err(StoreError::UnknownTransaction(id.to_string()).into());
    }
    save_transactions(conn, &txns)
}

pub fn delete_all_transactions(conn: &Connection) -> Result<()> {
    save_transactions(conn, &[])
}

/// Applies `FilterOptions` to an in-memory list. A date range needs both
/// bounds; an amount range only applies while its upper bound is positive.
pub fn filter_transactions(txns: &[Transaction], filters: &FilterOptions) -> Vec<Transaction> {
    let mut result: Vec<Transaction> = txns.to_vec();

    if let Some((ref start, ref end)) = filters.date_range {
        if !start.is_empty() && !end.is_empty() {
            result.retain(|t| t.date.as_str() >= start.as_str() && t.date.as_str() <= end.as_str());
        }
    }
    if !filters.categories.is_empty() {
        result.retain(|t| filters.categories.iter().any(|c| *c == t.category));
    }
    if let Some((min, max)) = filters.amount_range {
        if max > 0.0 {
            result.retain(|t| t.amount >= min && t.amount <= max);
        }
    }
    if let Some(t) = filters.r#type {
        result.retain(|txn| txn.r#type == t);
    }
    if let Some(ref term) = filters.search_term {
        let term = sanitize_search_term(term);
        if !term.is_empty() {
            result.retain(|t| sanitize_search_term(&t.description).contains(&term));
        }
    }
    result
}

/// Newest first by date string; equal dates keep stored order.
pub fn sorted_by_date(txns: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = txns.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Period-restricted subset via lexicographic comparison on the ISO date
/// string, both bounds inclusive.
pub fn transactions_between(txns: &[Transaction], range: &DateRange) -> Vec<Transaction> {
    txns.iter()
        .filter(|t| t.date.as_str() >= range.start.as_str() && t.date.as_str() <= range.end.as_str())
        .cloned()
        .collect()
}

pub fn category_by_id<'a>(cats: &'a [Category], id: &str) -> Option<&'a Category> {
    cats.iter().find(|c| c.id == id)
}

/// Resolves a CLI argument to a category by id first, then by
/// case-insensitive name.
pub fn resolve_category<'a>(cats: &'a [Category], key: &str) -> Option<&'a Category> {
    category_by_id(cats, key)
        .or_else(|| cats.iter().find(|c| c.name.to_lowercase() == key.to_lowercase()))
}

pub fn add_category(
    conn: &Connection,
    name: &str,
    r#type: TxnType,
    icon: &str,
    color: &str,
) -> Result<Category> {
    let category = Category {
        id: generate_id(),
        name: name.to_string(),
        r#type,
        icon: icon.to_string(),
        color: color.to_string(),
    };
    let mut cats = load_categories(conn)?;
    cats.push(category.clone());
    save_categories(conn, &cats)?;
    Ok(category)
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub r#type: Option<TxnType>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

pub fn update_category(conn: &Connection, id: &str, updates: CategoryUpdate) -> Result<Category> {
    if is_default_category(id) {
        return Err(StoreError::DefaultCategory(id.to_string()).into());
    }
    let mut cats = load_categories(conn)?;
    let cat = cats
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| StoreError::UnknownCategory(id.to_string()))?;

    if let Some(name) = updates.name {
        cat.name = name;
    }
    if let Some(t) = updates.r#type {
        cat.r#type = t;
    }
    if let Some(icon) = updates.icon {
        cat.icon = icon;
    }
    if let Some(color) = updates.color {
        cat.color = color;
    }

    let updated = cat.clone();
    save_categories(conn, &cats)?;
    Ok(updated)
}

pub fn delete_category(conn: &Connection, id: &str) -> Result<()> {
    if is_default_category(id) {
        return Err(StoreError::DefaultCategory(id.to_string()).into());
    }
    let mut cats = load_categories(conn)?;
    let before = cats.len();
    cats.retain(|c| c.id != id);
    if cats.len() == before {
        return Err(StoreError::UnknownCategory(id.to_string()).into());
    }
    save_categories(conn, &cats)
}

/// Restores the default set, discarding user-defined categories.
pub fn reset_categories(conn: &Connection) -> Result<()> {
    save_categories(conn, &DEFAULT_CATEGORIES)
}
