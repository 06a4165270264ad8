// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Data volume commands

use anyhow::{Result, bail};
use clap::Subcommand;
use virak_client::CreateVolumeRequest;
use virak_flags::{Flags, options, rules};

use crate::commands::{ZoneOptions, id_rules};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, or_dash, render, yes_no};

options! {
    pub struct CreateOptions: zone {
        name: string = ("name", "", "Volume name"),
        size: int = ("size", -1, "Size in GB"),
        offering_id: string = ("offeringId", "", "Volume service offering ID"),
    }
}

options! {
    pub struct VolumeOptions: zone {
        volume_id: string = ("volumeId", "", "Volume ID"),
    }
}

options! {
    pub struct AttachOptions: zone {
        volume_id: string = ("volumeId", "", "Volume ID"),
        instance_id: string = ("instanceId", "", "Instance to attach the volume to"),
    }
}

#[derive(Subcommand, Clone)]
pub enum VolumeCommand {
    /// List volumes
    #[command(alias = "ls")]
    List(Flags<ZoneOptions>),
    /// Create a volume
    Create(Flags<CreateOptions>),
    /// Delete a volume
    #[command(alias = "rm")]
    Delete(Flags<VolumeOptions>),
    /// Attach a volume to an instance
    Attach(Flags<AttachOptions>),
    /// Detach a volume from its instance
    Detach(Flags<VolumeOptions>),
    /// List volume service offerings
    ServiceOfferings(Flags<ZoneOptions>),
}

impl VolumeCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
            Self::Attach(flags) => attach(ctx, flags).await,
            Self::Detach(flags) => detach(ctx, flags).await,
            Self::ServiceOfferings(flags) => service_offerings(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let volumes = p.client.list_volumes(p.zone()).await?;
    render(ctx.json, &volumes, |volumes| {
        let mut tbl = create_table(&["ID", "NAME", "SIZE (GB)", "STATUS", "INSTANCE", "CREATED"]);
        for v in volumes {
            tbl.add_row(vec![
                v.id.clone(),
                v.name.clone(),
                v.size.to_string(),
                v.status.clone(),
                or_dash(v.attached_instance_id.clone()),
                format_time(v.created_at),
            ]);
        }
        print_table(tbl, "volumes");
    })
}

async fn create(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let mut checks = vec![rules::required("name"), rules::required("size")];
    checks.extend(id_rules("offeringId"));
    let p = ctx.prepare(&flags, &checks)?;
    if p.opts.size < 1 {
        bail!("--size must be at least 1");
    }
    let request = CreateVolumeRequest {
        name: p.opts.name.clone(),
        size: p.opts.size,
        service_offering_id: p.opts.offering_id.clone(),
    };
    p.client.create_volume(p.zone(), &request).await?;
    tracing::info!(name = %request.name, size = request.size, "volume created");
    println!("Volume {} ({} GB) is being created", request.name, request.size);
    Ok(())
}

async fn delete(ctx: &Context, flags: Flags<VolumeOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("volumeId"))?;
    p.client.delete_volume(p.zone(), &p.opts.volume_id).await?;
    println!("Volume {} deleted", p.opts.volume_id);
    Ok(())
}

async fn attach(ctx: &Context, flags: Flags<AttachOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("volumeId"));
    checks.extend(id_rules("instanceId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .attach_volume(p.zone(), &p.opts.volume_id, &p.opts.instance_id)
        .await?;
    println!(
        "Volume {} attached to instance {}",
        p.opts.volume_id, p.opts.instance_id
    );
    Ok(())
}

async fn detach(ctx: &Context, flags: Flags<VolumeOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("volumeId"))?;
    p.client.detach_volume(p.zone(), &p.opts.volume_id).await?;
    println!("Volume {} detached", p.opts.volume_id);
    Ok(())
}

async fn service_offerings(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let offerings = p.client.volume_offerings(p.zone()).await?;
    render(ctx.json, &offerings, |offerings| {
        let mut tbl = create_table(&["ID", "NAME", "SIZE (GB)", "CUSTOM", "HOURLY PRICE"]);
        for o in offerings {
            tbl.add_row(vec![
                o.id.clone(),
                o.name.clone(),
                or_dash(o.size),
                yes_no(o.is_custom),
                format!("{:.2}", o.hourly_price),
            ]);
        }
        print_table(tbl, "volume offerings");
    })
}
