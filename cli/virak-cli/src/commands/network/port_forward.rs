// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Port forwarding commands

use anyhow::Result;
use clap::Subcommand;
use virak_client::CreatePortForwardRequest;
use virak_flags::{Flags, options, rules};

use crate::commands::{check_port, id_rules};
use crate::context::Context;
use crate::output::render;
use crate::output::table::{create_table, print_table};

/// Protocols port forwarding supports
const PROTOCOLS: &[&str] = &["TCP", "UDP"];

options! {
    pub struct ListOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
    }
}

options! {
    pub struct CreateOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        public_ip_id: string = ("publicIpId", "", "Public IP receiving the traffic"),
        instance_id: string = ("instanceId", "", "Instance receiving the traffic"),
        protocol: string = ("protocol", "TCP", "Protocol (TCP or UDP)"),
        public_port: int = ("public-port", -1, "Port on the public IP"),
        private_port: int = ("private-port", -1, "Port on the instance"),
    }
}

options! {
    pub struct DeleteOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        rule_id: string = ("ruleId", "", "Port forwarding rule ID"),
    }
}

#[derive(Subcommand, Clone)]
pub enum PortForwardCommand {
    /// List port forwarding rules
    #[command(alias = "ls")]
    List(Flags<ListOptions>),
    /// Forward a public port to an instance
    Create(Flags<CreateOptions>),
    /// Delete a port forwarding rule
    #[command(alias = "rm")]
    Delete(Flags<DeleteOptions>),
}

impl PortForwardCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ListOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("networkId"))?;
    let forwards = p
        .client
        .list_port_forwards(p.zone(), &p.opts.network_id)
        .await?;
    render(ctx.json, &forwards, |forwards| {
        let mut tbl = create_table(&["ID", "PROTOCOL", "PUBLIC PORT", "PRIVATE IP", "PRIVATE PORT", "STATUS"]);
        for f in forwards {
            tbl.add_row(vec![
                f.id.clone(),
                f.protocol.clone(),
                f.public_port.to_string(),
                f.private_ip.clone(),
                f.private_port.to_string(),
                f.status.clone(),
            ]);
        }
        print_table(tbl, "port forwarding rules");
    })
}

async fn create(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend(id_rules("publicIpId"));
    checks.extend(id_rules("instanceId"));
    checks.extend([
        rules::one_of("protocol", PROTOCOLS),
        rules::required("public-port"),
        rules::required("private-port"),
    ]);
    let p = ctx.prepare(&flags, &checks)?;
    check_port("public-port", p.opts.public_port)?;
    check_port("private-port", p.opts.private_port)?;

    let request = CreatePortForwardRequest {
        protocol: p.opts.protocol.parse()?,
        public_port: p.opts.public_port,
        private_port: p.opts.private_port,
        instance_id: p.opts.instance_id.clone(),
        network_public_ip_id: p.opts.public_ip_id.clone(),
    };
    p.client
        .create_port_forward(p.zone(), &p.opts.network_id, &request)
        .await?;
    println!(
        "Forwarding {} port {} to instance {} port {}",
        request.protocol, request.public_port, request.instance_id, request.private_port
    );
    Ok(())
}

async fn delete(ctx: &Context, flags: Flags<DeleteOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend(id_rules("ruleId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .delete_port_forward(p.zone(), &p.opts.network_id, &p.opts.rule_id)
        .await?;
    println!("Port forwarding rule {} deleted", p.opts.rule_id);
    Ok(())
}
