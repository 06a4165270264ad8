// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall rule commands

use anyhow::{Result, bail};
use clap::Subcommand;
use strum::VariantNames;
use virak_client::{CreateFirewallRuleRequest, Protocol, TrafficType};
use virak_flags::rules::{self, equals};
use virak_flags::{Flags, Values, options};

use crate::commands::{check_port, check_range, id_rules, non_empty};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{or_dash, render};

options! {
    pub struct ListOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
    }
}

options! {
    pub struct CreateOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        traffic_type: string = ("traffic-type", "ingress", "Traffic direction (ingress or egress)"),
        protocol: string = ("protocol", "", "Protocol (TCP, UDP, ICMP or ALL)"),
        ip_source: string = ("ip-source", "0.0.0.0/0", "Source CIDR"),
        ip_destination: string = ("ip-destination", "", "Destination CIDR (egress only)"),
        port_start: int = ("port-start", -1, "First port of the range (TCP and UDP)"),
        port_end: int = ("port-end", -1, "Last port of the range (TCP and UDP)"),
        icmp_code: int = ("icmp-code", -1, "ICMP code (-1 for any)"),
        icmp_type: int = ("icmp-type", -1, "ICMP type (-1 for any)"),
    }
}

options! {
    pub struct DeleteOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        rule_id: string = ("ruleId", "", "Firewall rule ID"),
    }
}

#[derive(Subcommand, Clone)]
pub enum FirewallCommand {
    /// List firewall rules
    #[command(alias = "ls")]
    List(Flags<ListOptions>),
    /// Create a firewall rule
    Create(Flags<CreateOptions>),
    /// Delete a firewall rule
    #[command(alias = "rm")]
    Delete(Flags<DeleteOptions>),
}

impl FirewallCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Create(flags) => create(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
        }
    }
}

fn is_port_protocol(v: &dyn Values) -> bool {
    matches!(v.get_string("protocol").as_str(), "TCP" | "UDP")
}

async fn list(ctx: &Context, flags: Flags<ListOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("networkId"))?;
    let fw_rules = p
        .client
        .list_firewall_rules(p.zone(), &p.opts.network_id)
        .await?;
    render(ctx.json, &fw_rules, |fw_rules| {
        let mut tbl = create_table(&["ID", "TRAFFIC", "PROTOCOL", "SOURCE", "DESTINATION", "PORTS", "STATUS"]);
        for r in fw_rules {
            let ports = match (r.port_start, r.port_end) {
                (Some(start), Some(end)) if start != end => format!("{start}-{end}"),
                (Some(start), _) => start.to_string(),
                _ => "-".to_string(),
            };
            tbl.add_row(vec![
                r.id.clone(),
                r.traffic_type.clone(),
                r.protocol.clone(),
                r.ip_source.clone(),
                r.ip_destination.clone(),
                ports,
                r.status.clone(),
            ]);
        }
        print_table(tbl, "firewall rules");
    })
}

async fn create(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend([
        rules::one_of("traffic-type", TrafficType::VARIANTS),
        rules::required("protocol"),
        rules::one_of("protocol", Protocol::VARIANTS),
        rules::required("ip-source"),
        rules::required_if("port-start", is_port_protocol),
        rules::required_if("port-end", is_port_protocol),
        rules::required_if("icmp-type", equals("protocol", "ICMP")),
        rules::required_if("icmp-code", equals("protocol", "ICMP")),
    ]);
    let p = ctx.prepare(&flags, &checks)?;
    let request = firewall_request(&p.opts)?;
    let network_id = &p.opts.network_id;
    p.client
        .create_firewall_rule(p.zone(), network_id, &request)
        .await?;
    tracing::info!(%network_id, protocol = %request.protocol_type, "firewall rule created");
    println!(
        "{} {} rule created (ports {})",
        request.traffic_type,
        request.protocol_type,
        or_dash(request.port_start)
    );
    Ok(())
}

/// Build the rule once the declarative rules have passed. Port and ICMP
/// fields are only sent for the protocols they apply to.
fn firewall_request(o: &CreateOptions) -> Result<CreateFirewallRuleRequest> {
    let protocol: Protocol = o.protocol.parse()?;
    let mut request = CreateFirewallRuleRequest {
        traffic_type: o.traffic_type.parse()?,
        protocol_type: protocol,
        ip_source: o.ip_source.clone(),
        ip_destination: non_empty(o.ip_destination.clone()),
        port_start: None,
        port_end: None,
        icmp_code: None,
        icmp_type: None,
    };
    match protocol {
        Protocol::Tcp | Protocol::Udp => {
            check_port("port-start", o.port_start)?;
            check_port("port-end", o.port_end)?;
            if o.port_start > o.port_end {
                bail!("--port-start must be less than or equal to --port-end");
            }
            request.port_start = Some(o.port_start);
            request.port_end = Some(o.port_end);
        }
        Protocol::Icmp => {
            check_range("icmp-type", o.icmp_type, -1..=255)?;
            check_range("icmp-code", o.icmp_code, -1..=255)?;
            request.icmp_type = Some(o.icmp_type);
            request.icmp_code = Some(o.icmp_code);
        }
        Protocol::All => {}
    }
    Ok(request)
}

async fn delete(ctx: &Context, flags: Flags<DeleteOptions>) -> Result<()> {
    let mut checks = Vec::from(id_rules("networkId"));
    checks.extend(id_rules("ruleId"));
    let p = ctx.prepare(&flags, &checks)?;
    p.client
        .delete_firewall_rule(p.zone(), &p.opts.network_id, &p.opts.rule_id)
        .await?;
    println!("Firewall rule {} deleted", p.opts.rule_id);
    Ok(())
}
