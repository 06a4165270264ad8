// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zone commands

use anyhow::{Result, anyhow};
use clap::Subcommand;
use virak_flags::{Flags, options, rules};

use super::{NoOptions, ZoneOptions};
use crate::config::Config;
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{print_fields, render, yes_no};

options! {
    pub struct SetDefaultOptions {
        zone_id: string = ("zoneId", "", "Zone ID to use by default"),
    }
}

#[derive(Subcommand, Clone)]
pub enum ZoneCommand {
    /// List zones
    #[command(alias = "ls")]
    List(Flags<NoOptions>),
    /// Store the default zone used with --default-zone
    SetDefault(Flags<SetDefaultOptions>),
    /// Show the configured default zone
    ShowDefault,
    /// Show resource usage in a zone
    Resources(Flags<ZoneOptions>),
    /// Show services enabled in a zone
    Services(Flags<ZoneOptions>),
}

impl ZoneCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::SetDefault(flags) => set_default(ctx, flags).await,
            Self::ShowDefault => show_default(),
            Self::Resources(flags) => resources(ctx, flags).await,
            Self::Services(flags) => services(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let zones = p.client.list_zones().await?;
    render(ctx.json, &zones, |zones| {
        let mut tbl = create_table(&["ID", "NAME", "LOCATION", "READY", "PUBLIC"]);
        for z in zones {
            tbl.add_row(vec![
                z.id.clone(),
                z.name.clone(),
                z.location.clone(),
                yes_no(z.is_ready),
                yes_no(z.is_public),
            ]);
        }
        print_table(tbl, "zones");
    })
}

async fn set_default(ctx: &Context, flags: Flags<SetDefaultOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[rules::required("zoneId"), rules::is_ulid("zoneId")],
    )?;
    let zones = p.client.list_zones().await?;
    let zone = zones
        .into_iter()
        .find(|z| z.id == p.opts.zone_id)
        .ok_or_else(|| anyhow!("zone {} not found", p.opts.zone_id))?;

    let mut config = Config::load()?;
    config.defaults.zone_id = zone.id.clone();
    config.defaults.zone_name = zone.name.clone();
    config.save()?;

    tracing::info!(zone_id = %zone.id, "default zone set");
    println!("Default zone set to {} ({})", zone.name, zone.id);
    Ok(())
}

fn show_default() -> Result<()> {
    let config = Config::load()?;
    match config.default_zone() {
        Some(id) => print_fields(&[
            ("Zone ID", id.to_string()),
            ("Zone name", config.defaults.zone_name.clone()),
        ]),
        None => println!("No default zone configured"),
    }
    Ok(())
}

async fn resources(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let usage = p.client.zone_resources(p.zone()).await?;
    render(ctx.json, &usage, |u| {
        let mut tbl = create_table(&["RESOURCE", "USED", "TOTAL"]);
        for (name, usage) in [
            ("memory (MB)", u.memory),
            ("cpu", u.cpu_number),
            ("data volume (GB)", u.data_volume),
            ("instances", u.vm_limit),
        ] {
            tbl.add_row(vec![
                name.to_string(),
                usage.collected.to_string(),
                usage.total.to_string(),
            ]);
        }
        print_table(tbl, "resources");
    })
}

async fn services(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let services = p.client.zone_services(p.zone()).await?;
    render(ctx.json, &services, |s| {
        print_fields(&[
            ("Instances", yes_no(s.instance)),
            ("Data volumes", yes_no(s.data_volume)),
            ("Networks", yes_no(s.network)),
            ("Object storage", yes_no(s.object_storage)),
            ("Kubernetes", yes_no(s.k8s)),
        ]);
    })
}
