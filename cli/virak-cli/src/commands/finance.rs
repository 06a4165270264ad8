// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Finance commands

use anyhow::Result;
use clap::Subcommand;
use virak_client::ExpenseFilter;
use virak_flags::{Flags, options, rules};

use super::{NoOptions, non_empty};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, print_fields, render, yes_no};

options! {
    pub struct DocumentsOptions {
        year: int = ("year", -1, "Year the documents were issued in"),
    }
}

options! {
    pub struct ExpensesOptions {
        product_type: string = ("type", "", "Only expenses of this product type"),
        product_id: string = ("product-id", "", "Only expenses of this product"),
    }
}

#[derive(Subcommand, Clone)]
pub enum FinanceCommand {
    /// Show the wallet balance
    Wallet(Flags<NoOptions>),
    /// List finance documents of a year
    Documents(Flags<DocumentsOptions>),
    /// List payments
    Payments(Flags<NoOptions>),
    /// List expenses
    Expenses(Flags<ExpensesOptions>),
}

impl FinanceCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Wallet(flags) => wallet(ctx, flags).await,
            Self::Documents(flags) => documents(ctx, flags).await,
            Self::Payments(flags) => payments(ctx, flags).await,
            Self::Expenses(flags) => expenses(ctx, flags).await,
        }
    }
}

async fn wallet(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let wallet = p.client.wallet().await?;
    render(ctx.json, &wallet, |w| {
        print_fields(&[
            ("ID", w.id.clone()),
            ("Name", w.name.clone()),
            ("Balance", format!("{:.2}", w.balance)),
            ("Balance limit", format!("{:.2}", w.balance_limit)),
            ("Blocked", yes_no(w.is_blocked)),
        ]);
    })
}

async fn documents(ctx: &Context, flags: Flags<DocumentsOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[rules::required("year")])?;
    let documents = p.client.list_documents(p.opts.year).await?;
    render(ctx.json, &documents, |docs| {
        let mut tbl = create_table(&["ID", "TITLE", "AMOUNT", "STATUS", "DATE"]);
        for d in docs {
            tbl.add_row(vec![
                d.id.clone(),
                d.title.clone(),
                format!("{:.2}", d.amount),
                d.status.clone(),
                format_time(d.date),
            ]);
        }
        print_table(tbl, "documents");
    })
}

async fn payments(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let payments = p.client.list_payments().await?;
    render(ctx.json, &payments, |payments| {
        let mut tbl = create_table(&["ID", "TYPE", "AMOUNT", "STATUS", "CREATED"]);
        for pay in payments {
            tbl.add_row(vec![
                pay.id.clone(),
                pay.payment_type.clone(),
                format!("{:.2}", pay.amount),
                pay.status.clone(),
                format_time(pay.created_at),
            ]);
        }
        print_table(tbl, "payments");
    })
}

async fn expenses(ctx: &Context, flags: Flags<ExpensesOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[rules::is_ulid("product-id")])?;
    let filter = ExpenseFilter {
        product_type: non_empty(p.opts.product_type),
        product_id: non_empty(p.opts.product_id),
    };
    let expenses = p.client.list_expenses(&filter).await?;
    render(ctx.json, &expenses, |expenses| {
        let mut tbl = create_table(&["PRODUCT", "TYPE", "AMOUNT", "CREATED"]);
        for e in expenses {
            tbl.add_row(vec![
                e.product_name.clone(),
                e.product_type.clone(),
                format!("{:.2}", e.amount),
                format_time(e.created_at),
            ]);
        }
        print_table(tbl, "expenses");
    })
}
