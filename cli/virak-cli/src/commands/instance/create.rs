// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance creation, from flags or interactively

use anyhow::{Result, bail};
use virak_client::{Client, CreateInstanceRequest};
use virak_flags::rules::{self, Rule};
use virak_flags::{Flags, Values, options};

use super::{NAME_MAX_LEN, NAME_MIN_LEN, check_name};
use crate::commands::non_empty;
use crate::context::Context;
use crate::prompt::{self, LineReader};

options! {
    pub struct CreateOptions: zone {
        name: string = ("name", "", "Instance name"),
        offering_id: string = ("offeringId", "", "Service offering ID"),
        image_id: string = ("imageId", "", "VM image ID"),
        network_ids: strings = ("networkIds", [], "Networks to attach, comma separated"),
        ssh_key_id: string = ("sshKeyId", "", "SSH key to install"),
        interactive: bool = ("interactive", false, "Choose offering, image and network from menus"),
    }
}

fn not_interactive(v: &dyn Values) -> bool {
    !v.get_bool("interactive")
}

fn create_rules() -> Vec<Rule> {
    vec![
        rules::required_if("name", not_interactive),
        rules::min_length("name", NAME_MIN_LEN),
        rules::max_length("name", NAME_MAX_LEN),
        rules::required_if("offeringId", not_interactive),
        rules::is_ulid("offeringId"),
        rules::required_if("imageId", not_interactive),
        rules::is_ulid("imageId"),
        rules::required_if("networkIds", not_interactive),
        rules::is_ulid("sshKeyId"),
    ]
}

pub async fn run(ctx: &Context, flags: Flags<CreateOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &create_rules())?;
    let mut opts = p.opts;

    if !opts.name.is_empty()
        && let Err(message) = check_name(&opts.name)
    {
        bail!(message);
    }
    for id in &opts.network_ids {
        if !virak_flags::ulid::is_valid(id) {
            bail!("--networkIds must hold valid ULIDs, got \"{id}\"");
        }
    }

    if opts.interactive {
        let mut reader = prompt::stdin_reader();
        if !choose(&p.client, p.session.zone(), &mut opts, reader.as_mut()).await? {
            println!("Aborted");
            return Ok(());
        }
    }

    let request = CreateInstanceRequest {
        name: opts.name,
        service_offering_id: opts.offering_id,
        vm_image_id: opts.image_id,
        network_ids: opts.network_ids,
        ssh_key_id: non_empty(opts.ssh_key_id),
    };
    p.client.create_instance(p.session.zone(), &request).await?;
    tracing::info!(name = %request.name, "instance created");
    println!("Instance {} is being created", request.name);
    Ok(())
}

/// Fill in every choice the flags left open. False if the user aborted.
async fn choose(
    client: &Client,
    zone_id: &str,
    opts: &mut CreateOptions,
    reader: &mut dyn LineReader,
) -> Result<bool> {
    if opts.offering_id.is_empty() {
        let offerings: Vec<_> = client
            .instance_offerings(zone_id)
            .await?
            .into_iter()
            .filter(|o| o.is_available)
            .collect();
        let Some(i) = prompt::select(reader, "service offering", &offerings, |o| {
            format!(
                "{} ({} vCPU, {} MB RAM, {} GB disk)",
                o.name, o.hardware.cpu_core, o.hardware.memory_mb, o.hardware.root_disk_size_gb
            )
        })?
        else {
            return Ok(false);
        };
        opts.offering_id = offerings[i].id.clone();
    }

    if opts.image_id.is_empty() {
        let images: Vec<_> = client
            .list_vm_images(zone_id)
            .await?
            .into_iter()
            .filter(|img| img.is_available)
            .collect();
        let Some(i) = prompt::select(reader, "VM image", &images, |img| img.display_text.clone())?
        else {
            return Ok(false);
        };
        opts.image_id = images[i].id.clone();
    }

    if opts.network_ids.is_empty() {
        let networks = client.list_networks(zone_id).await?;
        let Some(i) = prompt::select(reader, "network", &networks, |n| n.name.clone())? else {
            return Ok(false);
        };
        opts.network_ids = vec![networks[i].id.clone()];
    }

    if opts.name.is_empty() {
        let Some(name) = prompt::ask(reader, "Instance name", |input| {
            check_name(input).map(|()| input.to_string())
        })?
        else {
            return Ok(false);
        };
        opts.name = name;
    }
    Ok(true)
}
