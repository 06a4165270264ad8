// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Wallet, payment and expense types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub balance: f64,
    /// How far the balance may go negative before services are suspended
    pub balance_limit: f64,
    pub is_blocked: bool,
}

/// A monthly invoice or similar finance document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceDocument {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub status: String,
    pub date: Option<i64>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub id: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub amount: f64,
    pub status: String,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    pub id: String,
    pub product_type: String,
    pub product_id: String,
    pub product_name: String,
    pub amount: f64,
    pub created_at: Option<i64>,
}

/// Filters for the expense listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub product_type: Option<String>,
    pub product_id: Option<String>,
}
