// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! DNS domain and record commands

use anyhow::Result;
use clap::Subcommand;
use strum::VariantNames;
use virak_client::{RecordRequest, RecordType};
use virak_flags::rules::{self, equals};
use virak_flags::{Flags, Rule, Values, options};

use super::{NoOptions, check_port, check_range, non_empty};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, or_dash, print_fields, render, yes_no};

options! {
    pub struct DomainOptions {
        domain: string = ("domain", "", "Domain name"),
    }
}

options! {
    pub struct RecordOptions {
        domain: string = ("domain", "", "Domain name"),
        record: string = ("record", "", "Record name, e.g. www or @"),
        record_type: string = ("type", "", "Record type"),
        content: string = ("content", "", "Record value"),
        ttl: int = ("ttl", 3600, "Time to live in seconds"),
        priority: int = ("priority", -1, "Priority (MX and SRV)"),
        weight: int = ("weight", -1, "Weight (SRV)"),
        port: int = ("port", -1, "Port (SRV)"),
        flags: int = ("flags", -1, "Flags (CAA)"),
        tag: string = ("tag", "", "Tag (CAA)"),
        license_usage: int = ("license-usage", -1, "Certificate usage (TLSA)"),
        selector: int = ("selector", -1, "Selector (TLSA)"),
        matching_type: int = ("matching-type", -1, "Matching type (TLSA)"),
    }
}

options! {
    /// Record flags plus the content being replaced
    pub struct UpdateRecordOptions {
        domain: string = ("domain", "", "Domain name"),
        record: string = ("record", "", "Record name, e.g. www or @"),
        record_type: string = ("type", "", "Record type"),
        content_id: string = ("contentId", "", "Record content ID"),
        content: string = ("content", "", "Record value"),
        ttl: int = ("ttl", 3600, "Time to live in seconds"),
        priority: int = ("priority", -1, "Priority (MX and SRV)"),
        weight: int = ("weight", -1, "Weight (SRV)"),
        port: int = ("port", -1, "Port (SRV)"),
        flags: int = ("flags", -1, "Flags (CAA)"),
        tag: string = ("tag", "", "Tag (CAA)"),
        license_usage: int = ("license-usage", -1, "Certificate usage (TLSA)"),
        selector: int = ("selector", -1, "Selector (TLSA)"),
        matching_type: int = ("matching-type", -1, "Matching type (TLSA)"),
    }
}

impl UpdateRecordOptions {
    /// Split off the content ID, leaving the fields shared with create
    fn split(self) -> (String, RecordOptions) {
        let record = RecordOptions {
            domain: self.domain,
            record: self.record,
            record_type: self.record_type,
            content: self.content,
            ttl: self.ttl,
            priority: self.priority,
            weight: self.weight,
            port: self.port,
            flags: self.flags,
            tag: self.tag,
            license_usage: self.license_usage,
            selector: self.selector,
            matching_type: self.matching_type,
        };
        (self.content_id, record)
    }
}

options! {
    pub struct RecordDeleteOptions {
        domain: string = ("domain", "", "Domain name"),
        record: string = ("record", "", "Record name"),
        record_type: string = ("type", "", "Record type"),
        content_id: string = ("contentId", "", "Record content ID"),
    }
}

#[derive(Subcommand, Clone)]
pub enum DnsCommand {
    /// Manage domains
    Domain {
        #[command(subcommand)]
        command: DomainCommand,
    },
    /// Manage records of a domain
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },
    /// List DNS events
    Events(Flags<NoOptions>),
}

#[derive(Subcommand, Clone)]
pub enum DomainCommand {
    /// List domains
    #[command(alias = "ls")]
    List(Flags<NoOptions>),
    /// Add a domain
    Create(Flags<DomainOptions>),
    /// Show a domain
    Show(Flags<DomainOptions>),
    /// Delete a domain
    #[command(alias = "rm")]
    Delete(Flags<DomainOptions>),
}

#[derive(Subcommand, Clone)]
pub enum RecordCommand {
    /// List records of a domain
    #[command(alias = "ls")]
    List(Flags<DomainOptions>),
    /// Create a record
    Create(Flags<RecordOptions>),
    /// Update one content of a record
    Update(Flags<UpdateRecordOptions>),
    /// Delete one content of a record
    #[command(alias = "rm")]
    Delete(Flags<RecordDeleteOptions>),
}

impl DnsCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Domain { command } => match command {
                DomainCommand::List(flags) => list_domains(ctx, flags).await,
                DomainCommand::Create(flags) => create_domain(ctx, flags).await,
                DomainCommand::Show(flags) => show_domain(ctx, flags).await,
                DomainCommand::Delete(flags) => delete_domain(ctx, flags).await,
            },
            Self::Record { command } => match command {
                RecordCommand::List(flags) => list_records(ctx, flags).await,
                RecordCommand::Create(flags) => create_record(ctx, flags).await,
                RecordCommand::Update(flags) => update_record(ctx, flags).await,
                RecordCommand::Delete(flags) => delete_record(ctx, flags).await,
            },
            Self::Events(flags) => events(ctx, flags).await,
        }
    }
}

async fn list_domains(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let domains = p.client.list_domains().await?;
    render(ctx.json, &domains, |domains| {
        let mut tbl = create_table(&["DOMAIN", "STATUS"]);
        for d in domains {
            tbl.add_row(vec![d.domain.clone(), d.status.clone()]);
        }
        print_table(tbl, "domains");
    })
}

async fn create_domain(ctx: &Context, flags: Flags<DomainOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[rules::required("domain")])?;
    p.client.create_domain(&p.opts.domain).await?;
    tracing::info!(domain = %p.opts.domain, "domain created");
    println!("Domain {} created", p.opts.domain);
    Ok(())
}

async fn show_domain(ctx: &Context, flags: Flags<DomainOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[rules::required("domain")])?;
    let domain = p.client.get_domain(&p.opts.domain).await?;
    render(ctx.json, &domain, |d| {
        print_fields(&[("Domain", d.domain.clone()), ("Status", d.status.clone())]);
        if !d.dns_info.is_null() {
            println!("DNS info:");
            println!(
                "{}",
                serde_json::to_string_pretty(&d.dns_info).unwrap_or_default()
            );
        }
    })
}

async fn delete_domain(ctx: &Context, flags: Flags<DomainOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[rules::required("domain")])?;
    p.client.delete_domain(&p.opts.domain).await?;
    tracing::info!(domain = %p.opts.domain, "domain deleted");
    println!("Domain {} deleted", p.opts.domain);
    Ok(())
}

async fn list_records(ctx: &Context, flags: Flags<DomainOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[rules::required("domain")])?;
    let records = p.client.list_records(&p.opts.domain).await?;
    render(ctx.json, &records, |records| {
        let mut tbl = create_table(&["NAME", "TYPE", "TTL", "CONTENT ID", "CONTENT", "PRIORITY", "DISABLED"]);
        for r in records {
            for c in &r.content {
                tbl.add_row(vec![
                    r.name.clone(),
                    r.record_type.clone(),
                    r.ttl.to_string(),
                    c.id.clone(),
                    c.content_raw.clone(),
                    or_dash(c.priority),
                    yes_no(c.is_disabled),
                ]);
            }
        }
        print_table(tbl, "records");
    })
}

/// Rules shared by record create and update. Type-specific fields are
/// required according to the record type.
fn record_rules() -> Vec<Rule> {
    vec![
        rules::required("domain"),
        rules::required("record"),
        rules::required("type"),
        rules::one_of("type", RecordType::VARIANTS),
        rules::required("content"),
        rules::required_if("priority", |v: &dyn Values| {
            matches!(v.get_string("type").as_str(), "MX" | "SRV")
        }),
        rules::required_if("weight", equals("type", "SRV")),
        rules::required_if("port", equals("type", "SRV")),
        rules::required_if("flags", equals("type", "CAA")),
        rules::required_if("tag", equals("type", "CAA")),
        rules::required_if("license-usage", equals("type", "TLSA")),
        rules::required_if("selector", equals("type", "TLSA")),
        rules::required_if("matching-type", equals("type", "TLSA")),
    ]
}

/// Build the request once the declarative rules have passed. Only the
/// fields of the record's own type are range checked and sent.
fn record_request(opts: RecordOptions) -> Result<RecordRequest> {
    let record_type: RecordType = opts.record_type.parse()?;
    check_range("ttl", opts.ttl, 1..=i64::from(i32::MAX))?;

    let mut request = RecordRequest {
        record: opts.record,
        record_type: opts.record_type,
        content: opts.content,
        ttl: opts.ttl,
        ..RecordRequest::default()
    };
    if record_type.has_priority() {
        check_range("priority", opts.priority, 0..=65535)?;
        request.priority = Some(opts.priority);
    }
    match record_type {
        RecordType::SRV => {
            check_range("weight", opts.weight, 0..=65535)?;
            check_port("port", opts.port)?;
            request.weight = Some(opts.weight);
            request.port = Some(opts.port);
        }
        RecordType::CAA => {
            check_range("flags", opts.flags, 0..=255)?;
            request.flags = Some(opts.flags);
            request.tag = non_empty(opts.tag);
        }
        RecordType::TLSA => {
            check_range("license-usage", opts.license_usage, 0..=3)?;
            check_range("selector", opts.selector, 0..=1)?;
            check_range("matching-type", opts.matching_type, 0..=2)?;
            request.license_usage = Some(opts.license_usage);
            request.selector = Some(opts.selector);
            request.matching_type = Some(opts.matching_type);
        }
        _ => {}
    }
    Ok(request)
}

async fn create_record(ctx: &Context, flags: Flags<RecordOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &record_rules())?;
    let domain = p.opts.domain.clone();
    let request = record_request(p.opts)?;
    p.client.create_record(&domain, &request).await?;
    tracing::info!(%domain, record = %request.record, record_type = %request.record_type, "record created");
    println!(
        "Record {} {} created in {domain}",
        request.record, request.record_type
    );
    Ok(())
}

async fn update_record(ctx: &Context, flags: Flags<UpdateRecordOptions>) -> Result<()> {
    let mut checks = record_rules();
    checks.insert(3, rules::required("contentId"));
    let p = ctx.prepare(&flags, &checks)?;
    let (content_id, opts) = p.opts.split();
    let domain = opts.domain.clone();
    let request = record_request(opts)?;
    p.client
        .update_record(&domain, &content_id, &request)
        .await?;
    println!(
        "Record {} {} updated in {domain}",
        request.record, request.record_type
    );
    Ok(())
}

async fn delete_record(ctx: &Context, flags: Flags<RecordDeleteOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[
            rules::required("domain"),
            rules::required("record"),
            rules::required("type"),
            rules::one_of("type", RecordType::VARIANTS),
            rules::required("contentId"),
        ],
    )?;
    let o = &p.opts;
    p.client
        .delete_record(&o.domain, &o.record, &o.record_type, &o.content_id)
        .await?;
    println!("Record {} {} deleted from {}", o.record, o.record_type, o.domain);
    Ok(())
}

async fn events(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let events = p.client.dns_events().await?;
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn srv(priority: i64, weight: i64, port: i64) -> RecordOptions {
        RecordOptions {
            domain: "example.com".to_string(),
            record: "_sip._tcp".to_string(),
            record_type: "SRV".to_string(),
            content: "sip.example.com".to_string(),
            priority,
            weight,
            port,
            ..RecordOptions::default()
        }
    }

    #[test]
    fn test_srv_request() {
        let request = record_request(srv(10, 0, 5060)).unwrap();
        assert_eq!(request.priority, Some(10));
        assert_eq!(request.weight, Some(0));
        assert_eq!(request.port, Some(5060));
        assert_eq!(request.ttl, 3600);
        assert_eq!(request.flags, None);
    }

    #[test_case(srv(10, -1, 5060), "--weight must be between 0 and 65535"; "explicit negative weight")]
    #[test_case(srv(-1, 5, 5060), "--priority must be between 0 and 65535"; "explicit negative priority")]
    #[test_case(srv(10, 5, 0), "--port must be between 1 and 65535"; "port zero")]
    #[test_case(srv(10, 5, 70000), "--port must be between 1 and 65535"; "port too large")]
    fn test_rejected_srv_values(opts: RecordOptions, message: &str) {
        let err = record_request(opts).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_tlsa_selector_out_of_range() {
        let opts = RecordOptions {
            record_type: "TLSA".to_string(),
            license_usage: 3,
            selector: 2,
            matching_type: 1,
            ..RecordOptions::default()
        };
        let err = record_request(opts).unwrap_err();
        assert_eq!(err.to_string(), "--selector must be between 0 and 1");
    }

    #[test]
    fn test_caa_flags_out_of_range() {
        let opts = RecordOptions {
            record_type: "CAA".to_string(),
            flags: 256,
            tag: "issue".to_string(),
            ..RecordOptions::default()
        };
        assert!(record_request(opts).is_err());
    }

    #[test]
    fn test_fields_of_other_types_are_not_sent() {
        let opts = RecordOptions {
            record_type: "A".to_string(),
            content: "192.0.2.1".to_string(),
            weight: 7,
            port: 80,
            ..RecordOptions::default()
        };
        let request = record_request(opts).unwrap();
        assert_eq!((request.weight, request.port), (None, None));
    }

    #[test]
    fn test_update_split_keeps_content_id() {
        let opts = UpdateRecordOptions {
            content_id: "c1".to_string(),
            record_type: "MX".to_string(),
            priority: 10,
            ..UpdateRecordOptions::default()
        };
        let (content_id, record) = opts.split();
        assert_eq!(content_id, "c1");
        assert_eq!(record.priority, 10);
        assert_eq!(record.record_type, "MX");
    }
}
