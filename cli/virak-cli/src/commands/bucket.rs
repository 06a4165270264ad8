// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Object storage bucket commands

use anyhow::Result;
use clap::Subcommand;
use strum::VariantNames;
use virak_client::{BucketPolicy, CreateBucketRequest, UpdateBucketRequest};
use virak_flags::{Flags, options, rules};

use super::ZoneOptions;
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, print_fields, render};

options! {
    pub struct CreateOptions: zone {
        name: string = ("name", "", "Bucket name"),
        policy: string = ("policy", "Private", "Access policy (Private or Public)"),
    }
}

options! {
    pub struct BucketOptions: zone {
        bucket_id: string = ("bucketId", "", "Bucket ID"),
    }
}

options! {
    pub struct UpdateOptions: zone {
        bucket_id: string = ("bucketId", "", "Bucket ID"),
        policy: string = ("policy", "", "Access policy (Private or Public)"),
    }
}

#[derive(Subcommand, Clone)]
pub enum BucketCommand {
    /// List buckets
    #[command(alias = "ls")]
    List(Flags<ZoneOptions>),
    /// Create a bucket
    Create(Flags<CreateOptions>),
    /// Show bucket details and credentials
    Show(Flags<BucketOptions>),
    /// Change the access policy of a bucket
    Update(Flags<UpdateOptions>),
    /// Delete a bucket
    #[command(alias = "rm")]
    Delete(Flags<BucketOptions>),
    /// List object storage events
    Events(Flags<ZoneOptions>),
}

impl BucketCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create(ctx, flags).await,
            Self::Show(flags) => show(ctx, flags).await,
            Self::Update(flags) => update(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
            Self::Events(flags) => events(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let buckets = p.client.list_buckets(p.zone()).await?;
    render(ctx.json, &buckets, |buckets| {
        let mut tbl = create_table(&["ID", "NAME", "POLICY", "STATUS", "SIZE", "CREATED"]);
        for b in buckets {
            tbl.add_row(vec![
                b.id.clone(),
                b.name.clone(),
                b.policy.clone(),
                b.status.clone(),
                b.size.to_string(),
                format_time(b.created_at),
            ]);
        }
        print_table(tbl, "buckets");
    })
}

async fn create(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[
            rules::required("name"),
            rules::min_length("name", 3),
            rules::max_length("name", 63),
            rules::required("policy"),
            rules::one_of("policy", BucketPolicy::VARIANTS),
        ],
    )?;
    let request = CreateBucketRequest {
        name: p.opts.name.clone(),
        policy: p.opts.policy.parse()?,
    };
    p.client.create_bucket(p.zone(), &request).await?;
    tracing::info!(name = %request.name, policy = %request.policy, "bucket created");
    println!("Bucket {} created", request.name);
    Ok(())
}

async fn show(ctx: &Context, flags: Flags<BucketOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[rules::required("bucketId"), rules::is_ulid("bucketId")],
    )?;
    let bucket = p.client.get_bucket(p.zone(), &p.opts.bucket_id).await?;
    render(ctx.json, &bucket, |b| {
        print_fields(&[
            ("ID", b.id.clone()),
            ("Name", b.name.clone()),
            ("Status", b.status.clone()),
            ("Policy", b.policy.clone()),
            ("URL", b.url.clone()),
            ("Size", b.size.to_string()),
            ("Access key", b.access_key.clone()),
            ("Secret key", b.secret_key.clone()),
            ("Created", format_time(b.created_at)),
        ]);
    })
}

async fn update(ctx: &Context, flags: Flags<UpdateOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[
            rules::required("bucketId"),
            rules::is_ulid("bucketId"),
            rules::required("policy"),
            rules::one_of("policy", BucketPolicy::VARIANTS),
        ],
    )?;
    let request = UpdateBucketRequest {
        policy: p.opts.policy.parse()?,
    };
    p.client
        .update_bucket(p.zone(), &p.opts.bucket_id, &request)
        .await?;
    println!("Bucket {} is now {}", p.opts.bucket_id, request.policy);
    Ok(())
}

async fn delete(ctx: &Context, flags: Flags<BucketOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[rules::required("bucketId"), rules::is_ulid("bucketId")],
    )?;
    p.client.delete_bucket(p.zone(), &p.opts.bucket_id).await?;
    tracing::info!(bucket_id = %p.opts.bucket_id, "bucket deleted");
    println!("Bucket {} deleted", p.opts.bucket_id);
    Ok(())
}

async fn events(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let events = p.client.bucket_events(p.zone()).await?;
    render(ctx.json, &events, |events| {
        let mut tbl = create_table(&["TYPE", "PRODUCT", "CONTENT", "CREATED"]);
        for e in events {
            tbl.add_row(vec![
                e.event_type.clone(),
                e.product_id.clone(),
                e.content.clone(),
                format_time(e.created_at),
            ]);
        }
        print_table(tbl, "events");
    })
}
