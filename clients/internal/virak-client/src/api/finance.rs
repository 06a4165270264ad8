// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::endpoints;
use crate::types::{Expense, ExpenseFilter, FinanceDocument, Payment, Wallet};
use crate::{Client, Result};

impl Client {
    pub async fn wallet(&self) -> Result<Wallet> {
        self.get(&endpoints::finance_wallet()).await
    }

    /// Finance documents issued in the given year
    pub async fn list_documents(&self, year: i64) -> Result<Vec<FinanceDocument>> {
        self.get_with_query(&endpoints::finance_documents(), &[("year", year.to_string())])
            .await
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>> {
        self.get(&endpoints::finance_payments()).await
    }

    pub async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut query = Vec::new();
        if let Some(product_type) = &filter.product_type {
            query.push(("type", product_type.clone()));
        }
        if let Some(product_id) = &filter.product_id {
            query.push(("product_id", product_id.clone()));
        }
        self.get_with_query(&endpoints::finance_expenses(), &query).await
    }
}
