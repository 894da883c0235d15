// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use outgo::models::{Category, Transaction, TxnType};
use outgo::stats;

fn txn(r#type: TxnType, category: &str, amount: f64, date: &str) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", category, date, amount),
        r#type,
        category: category.to_string(),
        amount,
        date: date.to_string(),
        description: String::new(),
        created_at: 0,
        updated_at: 0,
    }
}

fn cat(id: &str, name: &str, r#type: TxnType) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        r#type,
        icon: "🍔".to_string(),
        color: "#F97316".to_string(),
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn totals_and_category_breakdown() {
    let txns = vec![
        txn(TxnType::Expense, "food", 100.0, "2024-01-15"),
        txn(TxnType::Expense, "food", 50.0, "2024-01-20"),
        txn(TxnType::Income, "salary", 200.0, "2024-01-01"),
    ];
    let cats = vec![
        cat("food", "Food", TxnType::Expense),
        cat("salary", "Salary", TxnType::Income),
    ];

    assert_eq!(stats::total_expense(&txns), 150.0);
    assert_eq!(stats::total_income(&txns), 200.0);
    assert_eq!(stats::net_amount(&txns), 50.0);

    let breakdown = stats::category_stats(&txns, &cats);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "food");
    assert_eq!(breakdown[0].amount, 150.0);
    assert_eq!(breakdown[0].percentage, 100);
    assert_eq!(breakdown[0].count, 2);
}

#[test]
fn net_is_income_minus_expense() {
    let txns = vec![
        txn(TxnType::Income, "salary", 1200.5, "2024-03-01"),
        txn(TxnType::Expense, "food", 300.25, "2024-03-02"),
        txn(TxnType::Expense, "travel", 99.75, "2024-03-03"),
    ];
    assert_eq!(
        stats::net_amount(&txns),
        stats::total_income(&txns) - stats::total_expense(&txns)
    );
}

#[test]
fn dangling_category_counts_toward_total_but_not_breakdown() {
    let txns = vec![
        txn(TxnType::Expense, "nonexistent-id", 75.0, "2024-01-10"),
        txn(TxnType::Expense, "food", 25.0, "2024-01-11"),
    ];
    let cats = vec![cat("food", "Food", TxnType::Expense)];

    assert_eq!(stats::total_expense(&txns), 100.0);
    let breakdown = stats::category_stats(&txns, &cats);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "food");
    // Share is computed against the full expense total, dangling included.
    assert_eq!(breakdown[0].percentage, 25);
}

#[test]
fn percent_change_zero_baseline() {
    assert_eq!(stats::percent_change(0.0, 0.0), 0.0);
    assert_eq!(stats::percent_change(5.0, 0.0), 100.0);
}

#[test]
fn percent_change_rounds_to_two_decimals() {
    assert_eq!(stats::percent_change(150.0, 100.0), 50.0);
    assert_eq!(stats::percent_change(50.0, 100.0), -50.0);
    assert_eq!(stats::percent_change(1.0, 3.0), -66.67);
}

#[test]
fn trend_has_fixed_length_oldest_first() {
    let trend = stats::monthly_trend(&[], 6, day("2024-03-15"));
    let months: Vec<&str> = trend.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(
        months,
        vec!["10/2023", "11/2023", "12/2023", "01/2024", "02/2024", "03/2024"]
    );
    assert!(trend.iter().all(|m| m.income == 0.0 && m.expense == 0.0));
}

#[test]
fn trend_buckets_by_month() {
    let txns = vec![
        txn(TxnType::Income, "salary", 500.0, "2024-01-05"),
        txn(TxnType::Expense, "food", 80.0, "2024-01-20"),
        txn(TxnType::Expense, "food", 40.0, "2024-03-01"),
        // Outside the six-month window ending in March 2024.
        txn(TxnType::Expense, "food", 999.0, "2023-08-01"),
    ];
    let trend = stats::monthly_trend(&txns, 6, day("2024-03-15"));
    assert_eq!(trend.len(), 6);
    let january = trend.iter().find(|m| m.month == "01/2024").unwrap();
    assert_eq!(january.income, 500.0);
    assert_eq!(january.expense, 80.0);
    let march = trend.iter().find(|m| m.month == "03/2024").unwrap();
    assert_eq!(march.expense, 40.0);
    assert_eq!(trend.iter().map(|m| m.expense).sum::<f64>(), 120.0);
}

#[test]
fn today_expense_matches_on_date_prefix() {
    let txns = vec![
        txn(TxnType::Expense, "food", 10.0, "2024-05-05"),
        txn(TxnType::Expense, "food", 5.0, "2024-05-05T10:00"),
        txn(TxnType::Expense, "food", 99.0, "2024-05-04"),
        txn(TxnType::Income, "salary", 50.0, "2024-05-05"),
    ];
    assert_eq!(stats::today_expense(&txns, day("2024-05-05")), 15.0);
}

#[test]
fn empty_input_yields_zeroed_statistics() {
    let data = stats::compute_statistics(&[], &[], &[], &[], day("2024-06-01"));
    assert_eq!(data.total_income, 0.0);
    assert_eq!(data.total_expense, 0.0);
    assert_eq!(data.net_amount, 0.0);
    assert_eq!(data.today_expense, 0.0);
    // Zero against zero reads as no change, not a 100% jump.
    assert_eq!(data.income_compare, 0.0);
    assert_eq!(data.expense_compare, 0.0);
    assert!(data.category_stats.is_empty());
    assert_eq!(data.monthly_trend.len(), 6);
}

#[test]
fn percentages_sum_close_to_one_hundred() {
    let txns = vec![
        txn(TxnType::Expense, "food", 33.33, "2024-01-01"),
        txn(TxnType::Expense, "transport", 33.33, "2024-01-02"),
        txn(TxnType::Expense, "housing", 33.34, "2024-01-03"),
    ];
    let cats = vec![
        cat("food", "Food", TxnType::Expense),
        cat("transport", "Transport", TxnType::Expense),
        cat("housing", "Housing", TxnType::Expense),
    ];
    let breakdown = stats::category_stats(&txns, &cats);
    let sum: i64 = breakdown.iter().map(|s| s.percentage).sum();
    assert!((sum - 100).abs() <= breakdown.len() as i64);
}

#[test]
fn equal_amounts_keep_first_seen_order() {
    let txns = vec![
        txn(TxnType::Expense, "transport", 50.0, "2024-01-02"),
        txn(TxnType::Expense, "food", 50.0, "2024-01-03"),
        txn(TxnType::Expense, "housing", 80.0, "2024-01-01"),
    ];
    let cats = vec![
        cat("food", "Food", TxnType::Expense),
        cat("transport", "Transport", TxnType::Expense),
        cat("housing", "Housing", TxnType::Expense),
    ];
    let breakdown = stats::category_stats(&txns, &cats);
    let order: Vec<&str> = breakdown.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(order, vec!["housing", "transport", "food"]);
}

#[test]
fn average_daily_spending_uses_distinct_days() {
    let txns = vec![
        txn(TxnType::Expense, "food", 100.0, "2024-01-01"),
        txn(TxnType::Expense, "food", 50.0, "2024-01-01"),
        txn(TxnType::Expense, "food", 60.0, "2024-01-02"),
        txn(TxnType::Income, "salary", 1000.0, "2024-01-01"),
    ];
    assert_eq!(stats::average_daily_spending(&txns), 105.0);
    assert_eq!(stats::average_daily_spending(&[]), 0.0);
}

#[test]
fn trend_runs_over_the_full_list_not_the_period() {
    let current = vec![txn(TxnType::Expense, "food", 20.0, "2024-02-10")];
    let prior = vec![txn(TxnType::Expense, "food", 10.0, "2024-01-10")];
    let all = vec![
        txn(TxnType::Expense, "food", 20.0, "2024-02-10"),
        txn(TxnType::Expense, "food", 10.0, "2024-01-10"),
        txn(TxnType::Expense, "food", 7.0, "2023-12-25"),
    ];
    let cats = vec![cat("food", "Food", TxnType::Expense)];

    let data = stats::compute_statistics(&current, &prior, &all, &cats, day("2024-02-15"));
    assert_eq!(data.total_expense, 20.0);
    assert_eq!(data.expense_compare, 100.0);
    let december = data
        .monthly_trend
        .iter()
        .find(|m| m.month == "12/2023")
        .unwrap();
    assert_eq!(december.expense, 7.0);
}
