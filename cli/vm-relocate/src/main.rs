// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! vm-relocate - Move a linked clone's disks to another datastore

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;
use vim_client::{ConnectConfig, DiskMoveType, VimClient, VirtualMachineMovePriority};

mod relocate;
mod resolve;
mod wait;

#[cfg(test)]
mod fake;

use relocate::Relocation;
use wait::WaitOptions;

#[derive(Parser, Debug)]
#[command(
    name = "vm-relocate",
    version,
    about = "Relocate a linked clone virtual machine to another datastore",
    long_about = "Relocate a linked clone virtual machine to another datastore.\n\n\
        moveChildMostDiskBacking moves only the child-most delta disk and keeps the \
        VM linked to its shared parent disks. moveAllDiskBackingsAndAllowSharing \
        moves every disk backing, sharing parents that already exist at the target."
)]
struct Cli {
    /// Service URL (e.g. https://vcenter.example.com/sdk)
    #[arg(long, env = "VIM_URL")]
    url: String,

    /// User name for the service
    #[arg(long, env = "VIM_USERNAME")]
    username: String,

    /// Password for the service
    #[arg(long, env = "VIM_PASSWORD", hide_env_values = true)]
    password: String,

    /// Name of the virtual machine to relocate
    #[arg(long)]
    vmname: String,

    /// Either moveChildMostDiskBacking or moveAllDiskBackingsAndAllowSharing
    #[arg(long)]
    diskmovetype: DiskMoveType,

    /// Name of the target datastore
    #[arg(long)]
    datastorename: String,

    /// Scheduling priority of the relocation (defaultPriority, highPriority, lowPriority)
    #[arg(long)]
    priority: Option<VirtualMachineMovePriority>,

    /// Seconds to wait for the relocation task (0 waits forever)
    #[arg(long, default_value = "3600")]
    timeout: u64,

    /// Seconds between task status reads
    #[arg(long, default_value = "2")]
    poll_interval: u64,

    /// API release segment of the service path
    #[arg(long, env = "VIM_API_RELEASE", default_value = vim_api::DEFAULT_API_RELEASE)]
    api_release: String,

    /// Accept invalid TLS certificates
    #[arg(long, env = "VIM_TLS_INSECURE")]
    insecure: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn connect_config(&self) -> ConnectConfig {
        ConnectConfig::new(
            &self.url,
            &self.username,
            SecretString::from(self.password.clone()),
        )
        .with_api_release(&self.api_release)
        .with_insecure(self.insecure)
    }

    fn relocation(&self) -> Relocation {
        Relocation {
            vm_name: self.vmname.clone(),
            datastore_name: self.datastorename.clone(),
            disk_move_type: self.diskmovetype,
            priority: self.priority,
            wait: WaitOptions {
                timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
                interval: Duration::from_secs(self.poll_interval),
            },
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "vm_relocate=debug,vim_client=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.to_string()),
        ))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = VimClient::connect(&cli.connect_config())
        .await
        .with_context(|| format!("Failed to connect to {}", cli.url))?;

    let mut stdout = std::io::stdout();
    let outcome = relocate::run(&client, &cli.relocation(), &mut stdout).await;

    if let Err(e) = client.logout().await {
        tracing::warn!(error = %e, "Logout failed");
    }

    Ok(outcome?.exit_code())
}
