// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public IP and static NAT commands

use anyhow::Result;
use clap::Subcommand;
use virak_flags::{Flags, options};

use crate::commands::id_rules;
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{or_dash, render, yes_no};

options! {
    pub struct NetworkOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
    }
}

options! {
    pub struct IpOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        public_ip_id: string = ("publicIpId", "", "Public IP ID"),
    }
}

options! {
    pub struct StaticNatOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        public_ip_id: string = ("publicIpId", "", "Public IP ID"),
        instance_id: string = ("instanceId", "", "Instance to map the address to"),
    }
}

#[derive(Subcommand, Clone)]
pub enum PublicIpCommand {
    /// List public IPs of a network
    #[command(alias = "ls")]
    List(Flags<NetworkOptions>),
    /// Acquire a new public IP for a network
    Associate(Flags<NetworkOptions>),
    /// Release a public IP
    Disassociate(Flags<IpOptions>),
    /// Map a public IP to an instance
    EnableStaticNat(Flags<StaticNatOptions>),
    /// Remove the static NAT mapping of a public IP
    DisableStaticNat(Flags<IpOptions>),
}

impl PublicIpCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Associate(flags) => associate(ctx, flags).await,
            Self::Disassociate(flags) => disassociate(ctx, flags).await,
            Self::EnableStaticNat(flags) => enable_static_nat(ctx, flags).await,
            Self::DisableStaticNat(flags) => disable_static_nat(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<NetworkOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("networkId"))?;
    let ips = p.client.list_public_ips(p.zone(), &p.opts.network_id).await?;
    render(ctx.json, &ips, |ips| {
        let mut tbl = create_table(&["ID", "ADDRESS", "SOURCE NAT", "STATIC NAT", "INSTANCE"]);
        for ip in ips {
            tbl.add_row(vec![
                ip.id.clone(),
                ip.ip_address.clone(),
                yes_no(ip.is_source_nat),
                yes_no(ip.static_nat_enable),
                or_dash(ip.instance_id.clone()),
            ]);
        }
        print_table(tbl, "public IPs");
    })
}

async fn associate(ctx: &Context, flags: Flags<NetworkOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("networkId"))?;
    p.client
        .associate_public_ip(p.zone(), &p.opts.network_id)
        .await?;
    println!("Public IP requested for network {}", p.opts.network_id);
    Ok(())
}

async fn disassociate(ctx: &Context, flags: Flags<IpOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend(id_rules("publicIpId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .disassociate_public_ip(p.zone(), &p.opts.network_id, &p.opts.public_ip_id)
        .await?;
    println!("Public IP {} released", p.opts.public_ip_id);
    Ok(())
}

async fn enable_static_nat(ctx: &Context, flags: Flags<StaticNatOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend(id_rules("publicIpId"));
    checks.extend(id_rules("instanceId"));
    let p = ctx.prepare(&flags, &checks)?;
    let o = &p.opts;
    p.client
        .enable_static_nat(p.zone(), &o.network_id, &o.public_ip_id, &o.instance_id)
        .await?;
    println!(
        "Static NAT enabled: {} -> instance {}",
        o.public_ip_id, o.instance_id
    );
    Ok(())
}

async fn disable_static_nat(ctx: &Context, flags: Flags<IpOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend(id_rules("publicIpId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .disable_static_nat(p.zone(), &p.opts.network_id, &p.opts.public_ip_id)
        .await?;
    println!("Static NAT disabled for {}", p.opts.public_ip_id);
    Ok(())
}
