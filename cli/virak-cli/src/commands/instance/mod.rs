// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance commands

pub mod create;
pub mod delete;
pub mod snapshot;
pub mod volume;

use anyhow::Result;
use clap::Subcommand;
use virak_flags::{Flags, options};

use super::{ZoneOptions, id_rules};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, print_fields, render, yes_no};

pub use snapshot::SnapshotCommand;
pub use volume::VolumeCommand;

/// Instance names: 3 to 64 characters of letters, digits and '-'
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 64;

options! {
    pub struct InstanceOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
    }
}

options! {
    pub struct StopOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
        force: bool = ("force", false, "Power off without a clean shutdown"),
    }
}

options! {
    pub struct RebuildOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
        image_id: string = ("imageId", "", "VM image to reinstall from"),
    }
}

#[derive(Subcommand, Clone)]
pub enum InstanceCommand {
    /// List instances
    #[command(alias = "ls")]
    List(Flags<ZoneOptions>),
    /// Create an instance
    Create(Flags<create::CreateOptions>),
    /// Show an instance
    Show(Flags<InstanceOptions>),
    /// Delete an instance
    #[command(alias = "rm")]
    Delete(Flags<delete::DeleteOptions>),
    /// Start an instance
    Start(Flags<InstanceOptions>),
    /// Stop an instance
    Stop(Flags<StopOptions>),
    /// Reboot an instance
    Reboot(Flags<InstanceOptions>),
    /// Reinstall an instance from a VM image
    Rebuild(Flags<RebuildOptions>),
    /// Show resource metrics of an instance
    Metrics(Flags<InstanceOptions>),
    /// List instance service offerings
    ServiceOfferings(Flags<ZoneOptions>),
    /// List VM images
    VmImages(Flags<ZoneOptions>),
    /// Manage snapshots of an instance
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommand,
    },
    /// Manage data volumes
    Volume {
        #[command(subcommand)]
        command: VolumeCommand,
    },
}

impl InstanceCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create::run(ctx, flags).await,
            Self::Show(flags) => show(ctx, flags).await,
            Self::Delete(flags) => delete::run(ctx, flags).await,
            Self::Start(flags) => start(ctx, flags).await,
            Self::Stop(flags) => stop(ctx, flags).await,
            Self::Reboot(flags) => reboot(ctx, flags).await,
            Self::Rebuild(flags) => rebuild(ctx, flags).await,
            Self::Metrics(flags) => metrics(ctx, flags).await,
            Self::ServiceOfferings(flags) => service_offerings(ctx, flags).await,
            Self::VmImages(flags) => vm_images(ctx, flags).await,
            Self::Snapshot { command } => command.run(ctx).await,
            Self::Volume { command } => command.run(ctx).await,
        }
    }
}

/// Check an instance name. Used for both the flag and the interactive prompt.
pub fn check_name(name: &str) -> std::result::Result<(), String> {
    if name.len() < NAME_MIN_LEN {
        return Err(format!("name must be at least {NAME_MIN_LEN} characters long"));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(format!("name must be at most {NAME_MAX_LEN} characters long"));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("name must not start or end with '-'".to_string());
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("name may only contain letters, digits and '-'".to_string());
    }
    Ok(())
}

async fn list(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let instances = p.client.list_instances(p.zone()).await?;
    render(ctx.json, &instances, |instances| {
        let mut tbl = create_table(&["ID", "NAME", "STATE", "STATUS", "IMAGE", "CREATED"]);
        for i in instances {
            tbl.add_row(vec![
                i.id.clone(),
                i.name.clone(),
                i.instance_status.clone(),
                i.status.clone(),
                i.vm_image
                    .as_ref()
                    .map(|img| img.display_text.clone())
                    .unwrap_or_default(),
                format_time(i.created_at),
            ]);
        }
        print_table(tbl, "instances");
    })
}

async fn show(ctx: &Context, flags: Flags<InstanceOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    let instance = p.client.get_instance(p.zone(), &p.opts.instance_id).await?;
    render(ctx.json, &instance, |i| {
        let offering = i.service_offering.clone().unwrap_or_default();
        let image = i.vm_image.clone().unwrap_or_default();
        print_fields(&[
            ("ID", i.id.clone()),
            ("Name", i.name.clone()),
            ("State", i.instance_status.clone()),
            ("Status", i.status.clone()),
            ("Offering", offering.name),
            ("CPU cores", offering.hardware.cpu_core.to_string()),
            ("Memory (MB)", offering.hardware.memory_mb.to_string()),
            ("Disk (GB)", offering.hardware.root_disk_size_gb.to_string()),
            ("Image", image.display_text),
            ("Username", i.username.clone()),
            ("Created", format_time(i.created_at)),
        ]);
    })
}

async fn start(ctx: &Context, flags: Flags<InstanceOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    p.client
        .start_instance(p.zone(), &p.opts.instance_id)
        .await?;
    tracing::info!(instance_id = %p.opts.instance_id, "instance started");
    println!("Instance {} is starting", p.opts.instance_id);
    Ok(())
}

async fn stop(ctx: &Context, flags: Flags<StopOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    p.client
        .stop_instance(p.zone(), &p.opts.instance_id, p.opts.force)
        .await?;
    tracing::info!(instance_id = %p.opts.instance_id, forced = p.opts.force, "instance stopped");
    println!("Instance {} is stopping", p.opts.instance_id);
    Ok(())
}

async fn reboot(ctx: &Context, flags: Flags<InstanceOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    p.client
        .reboot_instance(p.zone(), &p.opts.instance_id)
        .await?;
    println!("Instance {} is rebooting", p.opts.instance_id);
    Ok(())
}

async fn rebuild(ctx: &Context, flags: Flags<RebuildOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("instanceId"));
    checks.extend(id_rules("imageId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .rebuild_instance(p.zone(), &p.opts.instance_id, &p.opts.image_id)
        .await?;
    tracing::info!(instance_id = %p.opts.instance_id, image_id = %p.opts.image_id, "instance rebuilt");
    println!("Instance {} is being rebuilt", p.opts.instance_id);
    Ok(())
}

async fn metrics(ctx: &Context, flags: Flags<InstanceOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    let metrics = p
        .client
        .instance_metrics(p.zone(), &p.opts.instance_id)
        .await?;
    render(ctx.json, &metrics, |metrics| {
        let mut tbl = create_table(&["METRIC", "LATEST", "AT", "SAMPLES"]);
        for (name, series) in metrics {
            let (at, value) = series
                .last()
                .map(|(ts, v)| (format_time(Some(*ts)), format!("{v:.2}")))
                .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
            tbl.add_row(vec![name.clone(), value, at, series.len().to_string()]);
        }
        print_table(tbl, "metrics");
    })
}

async fn service_offerings(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let offerings = p.client.instance_offerings(p.zone()).await?;
    render(ctx.json, &offerings, |offerings| {
        let mut tbl = create_table(&["ID", "NAME", "CPU", "MEMORY (MB)", "DISK (GB)", "HOURLY PRICE", "AVAILABLE"]);
        for o in offerings {
            tbl.add_row(vec![
                o.id.clone(),
                o.name.clone(),
                o.hardware.cpu_core.to_string(),
                o.hardware.memory_mb.to_string(),
                o.hardware.root_disk_size_gb.to_string(),
                format!("{:.2}", o.hourly_price),
                yes_no(o.is_available),
            ]);
        }
        print_table(tbl, "service offerings");
    })
}

async fn vm_images(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let images = p.client.list_vm_images(p.zone()).await?;
    render(ctx.json, &images, |images| {
        let mut tbl = create_table(&["ID", "NAME", "OS", "VERSION", "AVAILABLE"]);
        for img in images {
            tbl.add_row(vec![
                img.id.clone(),
                img.display_text.clone(),
                img.os_name.clone(),
                img.os_version.clone(),
                yes_no(img.is_available),
            ]);
        }
        print_table(tbl, "VM images");
    })
}
