// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance deletion with name confirmation

use anyhow::Result;
use virak_flags::{Flags, options};

use crate::commands::id_rules;
use crate::context::Context;
use crate::prompt;

options! {
    pub struct DeleteOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
        yes: bool = ("yes", false, "Skip typing the instance name to confirm"),
    }
}

pub async fn run(ctx: &Context, flags: Flags<DeleteOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    let instance = p
        .client
        .get_instance(p.zone(), &p.opts.instance_id)
        .await?;

    if !p.opts.yes {
        let mut reader = prompt::stdin_reader();
        let question = format!("Type the instance name ({}) to delete it", instance.name);
        if !prompt::confirm_typed(reader.as_mut(), &question, &instance.name)? {
            println!("Aborted");
            return Ok(());
        }
    }

    p.client
        .delete_instance(p.zone(), &instance.id, &instance.name)
        .await?;
    tracing::info!(instance_id = %instance.id, name = %instance.name, "instance deleted");
    println!("Instance {} is being deleted", instance.name);
    Ok(())
}
