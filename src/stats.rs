// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::dates::{format_date_iso, last_months, month_key};
use crate::models::{Category, CategoryStat, MonthlyData, StatisticData, Transaction, TxnType};

/// Default width of the monthly trend window.
pub const TREND_MONTHS: usize = 6;

pub fn total_income(txns: &[Transaction]) -> f64 {
    txns.iter()
        .filter(|t| t.r#type == TxnType::Income)
        .map(|t| t.amount)
        .sum()
}

pub fn total_expense(txns: &[Transaction]) -> f64 {
    txns.iter()
        .filter(|t| t.r#type == TxnType::Expense)
        .map(|t| t.amount)
        .sum()
}

pub fn net_amount(txns: &[Transaction]) -> f64 {
    total_income(txns) - total_expense(txns)
}

/// Expense total for `today`. Matches on the ISO date string prefix, so a
/// stored `date` longer than YYYY-MM-DD still counts toward the day.
pub fn today_expense(txns: &[Transaction], today: NaiveDate) -> f64 {
    let prefix = format_date_iso(today);
    txns.iter()
        .filter(|t| t.r#type == TxnType::Expense && t.date.starts_with(&prefix))
        .map(|t| t.amount)
        .sum()
}

/// Per-category expense breakdown. Transactions whose category id has no
/// match in `categories` are skipped here while still counting toward the
/// expense total that percentages are computed against.
pub fn category_stats(txns: &[Transaction], categories: &[Category]) -> Vec<CategoryStat> {
    let total = total_expense(txns);

    let mut stats: Vec<CategoryStat> = Vec::new();
    for txn in txns.iter().filter(|t| t.r#type == TxnType::Expense) {
        let Some(category) = categories.iter().find(|c| c.id == txn.category) else {
            continue;
        };
        match stats.iter_mut().find(|s| s.category == category.id) {
            Some(stat) => {
                stat.amount += txn.amount;
                stat.count += 1;
            }
            None => stats.push(CategoryStat {
                category: txn.category.clone(),
                name: category.name.clone(),
                icon: category.icon.clone(),
                amount: txn.amount,
                percentage: 0,
                count: 1,
            }),
        }
    }

    for stat in &mut stats {
        stat.percentage = if total > 0.0 {
            (stat.amount / total * 100.0).round() as i64
        } else {
            0
        };
    }
    // Stable sort: categories with equal amounts keep first-seen order.
    stats.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    stats
}

/// Income/expense totals for the `months_to_show` calendar months ending at
/// `reference`'s month, oldest first. Transactions are bucketed by their
/// formatted month key; undated or unparseable rows match no bucket.
pub fn monthly_trend(
    txns: &[Transaction],
    months_to_show: usize,
    reference: NaiveDate,
) -> Vec<MonthlyData> {
    let mut months = last_months(months_to_show, reference);
    months.reverse();

    months
        .into_iter()
        .map(|month| {
            let mut income = 0.0;
            let mut expense = 0.0;
            for txn in txns {
                if month_key(&txn.date).as_deref() != Some(month.as_str()) {
                    continue;
                }
                match txn.r#type {
                    TxnType::Income => income += txn.amount,
                    TxnType::Expense => expense += txn.amount,
                }
            }
            MonthlyData {
                month,
                income,
                expense,
            }
        })
        .collect()
}

/// Percentage change against a prior-period value, rounded to two decimals.
/// A zero baseline yields 100 when the current value is positive, else 0.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    let change = (current - previous) / previous * 100.0;
    (change * 100.0).round() / 100.0
}

/// Mean expense per active day: total spent divided by the number of
/// distinct dates carrying at least one expense, rounded to the nearest
/// whole amount.
pub fn average_daily_spending(txns: &[Transaction]) -> f64 {
    let expenses: Vec<&Transaction> = txns
        .iter()
        .filter(|t| t.r#type == TxnType::Expense)
        .collect();
    if expenses.is_empty() {
        return 0.0;
    }
    let total: f64 = expenses.iter().map(|t| t.amount).sum();
    let days: HashSet<&str> = expenses.iter().map(|t| t.date.as_str()).collect();
    (total / days.len() as f64).round()
}

/// Assembles the full statistics view for one period. `current` and `prior`
/// are the period-filtered subsets supplied by the caller; the monthly trend
/// deliberately runs over the complete list (`all`) so it stays fixed no
/// matter which period is on screen. `today` is injected rather than read
/// from the system clock.
pub fn compute_statistics(
    current: &[Transaction],
    prior: &[Transaction],
    all: &[Transaction],
    categories: &[Category],
    today: NaiveDate,
) -> StatisticData {
    let income = total_income(current);
    let expense = total_expense(current);
    let net = net_amount(current);
    let today_spent = today_expense(current, today);

    let prior_income = total_income(prior);
    let prior_expense = total_expense(prior);
    let prior_net = net_amount(prior);
    let prior_today = today_expense(prior, today);

    StatisticData {
        total_income: income,
        total_expense: expense,
        net_amount: net,
        today_expense: today_spent,
        income_compare: percent_change(income, prior_income),
        expense_compare: percent_change(expense, prior_expense),
        net_amount_compare: percent_change(net, prior_net),
        today_expense_compare: percent_change(today_spent, prior_today),
        category_stats: category_stats(current, categories),
        monthly_trend: monthly_trend(all, TREND_MONTHS, today),
    }
}
