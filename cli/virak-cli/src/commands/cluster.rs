// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Kubernetes cluster commands

use anyhow::{Result, bail};
use clap::Subcommand;
use virak_client::{CreateClusterRequest, ScaleClusterRequest, UpdateClusterRequest};
use virak_flags::rules::{self, is_true};
use virak_flags::{Flags, Values, options};

use super::{ZoneOptions, id_rules, non_empty};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, or_dash, print_fields, render, yes_no};

options! {
    pub struct CreateOptions: zone {
        name: string = ("name", "", "Cluster name"),
        description: string = ("description", "", "Cluster description"),
        version_id: string = ("versionId", "", "Kubernetes version ID"),
        offering_id: string = ("offeringId", "", "Service offering ID for the nodes"),
        ssh_key_id: string = ("sshKeyId", "", "SSH key installed on the nodes"),
        network_id: string = ("networkId", "", "Network the nodes are attached to"),
        ha_enabled: bool = ("ha", false, "Run a highly available control plane"),
        cluster_size: int = ("cluster-size", 1, "Number of worker nodes"),
        registry_username: string = ("registry-username", "", "Private registry username"),
        registry_password: string = ("registry-password", "", "Private registry password"),
        registry_url: string = ("registry-url", "", "Private registry URL"),
    }
}

options! {
    pub struct ClusterOptions: zone {
        cluster_id: string = ("clusterId", "", "Cluster ID"),
    }
}

options! {
    pub struct UpdateOptions: zone {
        cluster_id: string = ("clusterId", "", "Cluster ID"),
        name: string = ("name", "", "New cluster name"),
        description: string = ("description", "", "New description"),
    }
}

options! {
    pub struct ScaleOptions: zone {
        cluster_id: string = ("clusterId", "", "Cluster ID"),
        auto_scaling: bool = ("auto-scaling", false, "Let the cluster scale between min and max"),
        cluster_size: int = ("cluster-size", -1, "Fixed number of worker nodes"),
        min_cluster_size: int = ("min-cluster-size", -1, "Minimum nodes with autoscaling"),
        max_cluster_size: int = ("max-cluster-size", -1, "Maximum nodes with autoscaling"),
    }
}

#[derive(Subcommand, Clone)]
pub enum ClusterCommand {
    /// List clusters
    #[command(alias = "ls")]
    List(Flags<ZoneOptions>),
    /// Create a cluster
    Create(Flags<CreateOptions>),
    /// Show a cluster
    Show(Flags<ClusterOptions>),
    /// Rename a cluster or change its description
    Update(Flags<UpdateOptions>),
    /// Delete a cluster
    #[command(alias = "rm")]
    Delete(Flags<ClusterOptions>),
    /// Start a stopped cluster
    Start(Flags<ClusterOptions>),
    /// Stop a cluster
    Stop(Flags<ClusterOptions>),
    /// Change the node count or autoscaling range
    Scale(Flags<ScaleOptions>),
    /// List available Kubernetes versions
    Versions(Flags<ZoneOptions>),
    /// List events of a cluster
    Events(Flags<ClusterOptions>),
}

impl ClusterCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create(ctx, flags).await,
            Self::Show(flags) => show(ctx, flags).await,
            Self::Update(flags) => update(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
            Self::Start(flags) => start(ctx, flags).await,
            Self::Stop(flags) => stop(ctx, flags).await,
            Self::Scale(flags) => scale(ctx, flags).await,
            Self::Versions(flags) => versions(ctx, flags).await,
            Self::Events(flags) => events(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let clusters = p.client.list_clusters(p.zone()).await?;
    render(ctx.json, &clusters, |clusters| {
        let mut tbl = create_table(&["ID", "NAME", "STATUS", "VERSION", "NODES", "HA"]);
        for c in clusters {
            tbl.add_row(vec![
                c.id.clone(),
                c.name.clone(),
                c.status.clone(),
                c.kubernetes_version.clone(),
                c.cluster_size.to_string(),
                yes_no(c.ha_enabled),
            ]);
        }
        print_table(tbl, "clusters");
    })
}

async fn create(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[
            rules::required("name"),
            rules::max_length("name", 64),
            rules::required("versionId"),
            rules::is_ulid("versionId"),
            rules::required("offeringId"),
            rules::is_ulid("offeringId"),
            rules::required("sshKeyId"),
            rules::is_ulid("sshKeyId"),
            rules::required("networkId"),
            rules::is_ulid("networkId"),
            rules::required_if("registry-password", |v: &dyn Values| {
                !v.get_string("registry-username").is_empty()
            }),
            rules::required_if("registry-url", |v: &dyn Values| {
                !v.get_string("registry-username").is_empty()
            }),
        ],
    )?;
    if p.opts.cluster_size < 1 {
        bail!("cluster-size must be at least 1");
    }

    let o = p.opts;
    let request = CreateClusterRequest {
        name: o.name,
        kubernetes_version_id: o.version_id,
        service_offering_id: o.offering_id,
        ssh_key_id: o.ssh_key_id,
        network_id: o.network_id,
        ha_enabled: o.ha_enabled,
        cluster_size: o.cluster_size,
        description: non_empty(o.description),
        private_registry_username: non_empty(o.registry_username),
        private_registry_password: non_empty(o.registry_password),
        private_registry_url: non_empty(o.registry_url),
    };
    p.client.create_cluster(p.session.zone(), &request).await?;
    tracing::info!(name = %request.name, "cluster created");
    println!("Cluster {} is being created", request.name);
    Ok(())
}

async fn show(ctx: &Context, flags: Flags<ClusterOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("clusterId"))?;
    let cluster = p.client.get_cluster(p.zone(), &p.opts.cluster_id).await?;
    render(ctx.json, &cluster, |c| {
        print_fields(&[
            ("ID", c.id.clone()),
            ("Name", c.name.clone()),
            ("Description", c.description.clone()),
            ("Status", c.status.clone()),
            ("Version", c.kubernetes_version.clone()),
            ("HA", yes_no(c.ha_enabled)),
            ("Nodes", c.cluster_size.to_string()),
            ("Autoscaling", yes_no(c.auto_scaling)),
            ("Min nodes", or_dash(c.min_cluster_size)),
            ("Max nodes", or_dash(c.max_cluster_size)),
            ("Created", format_time(c.created_at)),
        ]);
    })
}

async fn update(ctx: &Context, flags: Flags<UpdateOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("clusterId"));
    checks.push(rules::required("name"));
    checks.push(rules::max_length("name", 64));
    let p = ctx.prepare(&flags, &checks)?;
    let request = UpdateClusterRequest {
        name: p.opts.name.clone(),
        description: non_empty(p.opts.description.clone()),
    };
    p.client
        .update_cluster(p.zone(), &p.opts.cluster_id, &request)
        .await?;
    println!("Cluster {} updated", p.opts.cluster_id);
    Ok(())
}

async fn delete(ctx: &Context, flags: Flags<ClusterOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("clusterId"))?;
    p.client.delete_cluster(p.zone(), &p.opts.cluster_id).await?;
    tracing::info!(cluster_id = %p.opts.cluster_id, "cluster deleted");
    println!("Cluster {} is being deleted", p.opts.cluster_id);
    Ok(())
}

async fn start(ctx: &Context, flags: Flags<ClusterOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("clusterId"))?;
    p.client.start_cluster(p.zone(), &p.opts.cluster_id).await?;
    println!("Cluster {} is starting", p.opts.cluster_id);
    Ok(())
}

async fn stop(ctx: &Context, flags: Flags<ClusterOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("clusterId"))?;
    p.client.stop_cluster(p.zone(), &p.opts.cluster_id).await?;
    println!("Cluster {} is stopping", p.opts.cluster_id);
    Ok(())
}

/// Build the scale request once the declarative rules have passed.
///
/// The range check spans two flags, so it runs here rather than as a rule.
fn scale_request(opts: &ScaleOptions) -> Result<ScaleClusterRequest> {
    if !opts.auto_scaling {
        if opts.cluster_size < 1 {
            bail!("cluster-size must be at least 1");
        }
        return Ok(ScaleClusterRequest::fixed(opts.cluster_size));
    }
    if opts.min_cluster_size < 1 {
        bail!("min-cluster-size must be at least 1");
    }
    if opts.min_cluster_size > opts.max_cluster_size {
        bail!("min-cluster-size must be less than or equal to max-cluster-size");
    }
    Ok(ScaleClusterRequest::auto(
        opts.min_cluster_size,
        opts.max_cluster_size,
    ))
}

async fn scale(ctx: &Context, flags: Flags<ScaleOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("clusterId"));
    checks.extend([
        rules::required_if("min-cluster-size", is_true("auto-scaling")),
        rules::required_if("max-cluster-size", is_true("auto-scaling")),
        rules::required_if("cluster-size", |v: &dyn Values| !v.get_bool("auto-scaling")),
    ]);
    let p = ctx.prepare(&flags, &checks)?;
    let request = scale_request(&p.opts)?;
    p.client
        .scale_cluster(p.zone(), &p.opts.cluster_id, &request)
        .await?;
    tracing::info!(cluster_id = %p.opts.cluster_id, ?request, "cluster scaled");
    println!("Cluster {} is scaling", p.opts.cluster_id);
    Ok(())
}

async fn versions(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let versions = p.client.cluster_versions(p.zone()).await?;
    render(ctx.json, &versions, |versions| {
        let mut tbl = create_table(&["ID", "VERSION", "ENABLED"]);
        for v in versions {
            tbl.add_row(vec![v.id.clone(), v.version.clone(), yes_no(v.enabled)]);
        }
        print_table(tbl, "versions");
    })
}

async fn events(ctx: &Context, flags: Flags<ClusterOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("clusterId"))?;
    let events = p.client.cluster_events(p.zone(), &p.opts.cluster_id).await?;
    render(ctx.json, &events, |events| {
        let mut tbl = create_table(&["TYPE", "CONTENT", "CREATED"]);
        for e in events {
            tbl.add_row(vec![
                e.event_type.clone(),
                e.content.clone(),
                format_time(e.created_at),
            ]);
        }
        print_table(tbl, "events");
    })
}
