// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance snapshot commands

use anyhow::Result;
use clap::Subcommand;
use virak_flags::rules::{self, Rule};
use virak_flags::{Flags, Values, options};

use crate::commands::id_rules;
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, render, yes_no};
use crate::prompt;

options! {
    pub struct ListOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
    }
}

options! {
    pub struct CreateOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
        name: string = ("name", "", "Snapshot name"),
    }
}

options! {
    pub struct SnapshotOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
        snapshot_id: string = ("snapshotId", "", "Snapshot ID"),
    }
}

options! {
    pub struct RevertOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
        snapshot_id: string = ("snapshotId", "", "Snapshot ID"),
        interactive: bool = ("interactive", false, "Choose the snapshot from a menu"),
    }
}

#[derive(Subcommand, Clone)]
pub enum SnapshotCommand {
    /// List snapshots of an instance
    #[command(alias = "ls")]
    List(Flags<ListOptions>),
    /// Take a snapshot
    Create(Flags<CreateOptions>),
    /// Delete a snapshot
    #[command(alias = "rm")]
    Delete(Flags<SnapshotOptions>),
    /// Revert an instance to a snapshot
    Revert(Flags<RevertOptions>),
}

impl SnapshotCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
            Self::Revert(flags) => revert(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ListOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    let snapshots = p
        .client
        .list_snapshots(p.zone(), &p.opts.instance_id)
        .await?;
    render(ctx.json, &snapshots, |snapshots| {
        let mut tbl = create_table(&["ID", "NAME", "STATUS", "CURRENT", "CREATED"]);
        for s in snapshots {
            tbl.add_row(vec![
                s.id.clone(),
                s.name.clone(),
                s.status.clone(),
                yes_no(s.current),
                format_time(s.created_at),
            ]);
        }
        print_table(tbl, "snapshots");
    })
}

async fn create(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("instanceId"));
    checks.extend([rules::required("name"), rules::max_length("name", 64)]);
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .create_snapshot(p.zone(), &p.opts.instance_id, &p.opts.name)
        .await?;
    tracing::info!(instance_id = %p.opts.instance_id, name = %p.opts.name, "snapshot created");
    println!("Snapshot {} is being created", p.opts.name);
    Ok(())
}

async fn delete(ctx: &Context, flags: Flags<SnapshotOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("instanceId"));
    checks.extend(id_rules("snapshotId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .delete_snapshot(p.zone(), &p.opts.instance_id, &p.opts.snapshot_id)
        .await?;
    println!("Snapshot {} deleted", p.opts.snapshot_id);
    Ok(())
}

fn revert_rules() -> Vec<Rule> {
    let mut checks = Vec::from(id_rules("instanceId"));
    checks.extend([
        rules::mutually_exclusive("snapshotId", "interactive"),
        rules::required_if("snapshotId", |v: &dyn Values| !v.get_bool("interactive")),
        rules::is_ulid("snapshotId"),
    ]);
    checks
}

async fn revert(ctx: &Context, flags: Flags<RevertOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &revert_rules())?;
    let zone = p.zone();
    let instance_id = &p.opts.instance_id;

    let snapshot_id = if p.opts.interactive {
        let snapshots = p.client.list_snapshots(zone, instance_id).await?;
        let mut reader = prompt::stdin_reader();
        let choice = prompt::select(reader.as_mut(), "snapshot", &snapshots, |s| {
            let current = if s.current { ", current" } else { "" };
            format!("{} ({}{current})", s.name, format_time(s.created_at))
        })?;
        match choice {
            Some(i) => snapshots[i].id.clone(),
            None => {
                println!("Aborted");
                return Ok(());
            }
        }
    } else {
        p.opts.snapshot_id.clone()
    };

    p.client
        .revert_snapshot(zone, instance_id, &snapshot_id)
        .await?;
    tracing::info!(%instance_id, %snapshot_id, "instance reverted");
    println!("Instance {instance_id} is reverting to snapshot {snapshot_id}");
    Ok(())
}
