// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Income,
    Expense,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Income => "income",
            TxnType::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub r#type: TxnType,
    pub category: String,
    pub amount: f64,
    pub date: String, // YYYY-MM-DD
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub r#type: TxnType,
    pub icon: String,
    pub color: String,
}

/// Filters applied to a transaction listing. All fields are optional; an
/// amount range only applies when its upper bound is positive.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub r#type: Option<TxnType>,
    pub categories: Vec<String>,
    pub date_range: Option<(String, String)>,
    pub amount_range: Option<(f64, f64)>,
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub name: String,
    pub icon: String,
    pub amount: f64,
    pub percentage: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    pub month: String, // MM/yyyy
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticData {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_amount: f64,
    pub today_expense: f64,
    pub income_compare: f64,
    pub expense_compare: f64,
    pub net_amount_compare: f64,
    pub today_expense_compare: f64,
    pub category_stats: Vec<CategoryStat>,
    pub monthly_trend: Vec<MonthlyData>,
}
