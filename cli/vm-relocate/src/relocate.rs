// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Relocation driver: resolve, submit, wait, report

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use vim_client::{
    DiskMoveType, InventoryKind, ManagedObjectReference, VimApi, VirtualMachineMovePriority,
    VirtualMachineRelocateSpec,
};

use crate::resolve::resolve;
use crate::wait::{WaitOptions, wait_for_task};

/// Everything a single relocation run needs, minus the connection
#[derive(Debug, Clone)]
pub struct Relocation {
    pub vm_name: String,
    pub datastore_name: String,
    pub disk_move_type: DiskMoveType,
    pub priority: Option<VirtualMachineMovePriority>,
    pub wait: WaitOptions,
}

/// How a run ended, short of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Relocated,
    /// The task ended in error without recording a fault
    NotRelocated,
    VmNotFound,
    DatastoreNotFound,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::NotRelocated => ExitCode::FAILURE,
            Outcome::Relocated | Outcome::VmNotFound | Outcome::DatastoreNotFound => {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Relocation request targeting `datastore`
pub fn relocate_spec(
    datastore: ManagedObjectReference,
    disk_move_type: DiskMoveType,
) -> VirtualMachineRelocateSpec {
    VirtualMachineRelocateSpec::new(datastore, disk_move_type)
}

/// Run one relocation, writing the user-facing result line to `out`.
///
/// Nothing is submitted unless both the virtual machine and the datastore
/// resolve. Task faults, timeouts and service errors come back as `Err`.
pub async fn run<A, W>(api: &A, relocation: &Relocation, out: &mut W) -> Result<Outcome>
where
    A: VimApi + ?Sized,
    W: Write,
{
    let Some(vm) = resolve(api, InventoryKind::VirtualMachine, &relocation.vm_name)
        .await
        .context("Failed to list virtual machines")?
    else {
        writeln!(out, "Virtual Machine {} doesn't exist", relocation.vm_name)?;
        return Ok(Outcome::VmNotFound);
    };

    let Some(datastore) = resolve(api, InventoryKind::Datastore, &relocation.datastore_name)
        .await
        .context("Failed to list datastores")?
    else {
        writeln!(out, "Datastore {} Not Found", relocation.datastore_name)?;
        return Ok(Outcome::DatastoreNotFound);
    };

    let spec = relocate_spec(datastore, relocation.disk_move_type);
    tracing::info!(
        vm = %vm,
        datastore = %spec.datastore,
        disk_move_type = %spec.disk_move_type,
        "Submitting relocation"
    );

    let task = api
        .relocate_vm(&vm, &spec, relocation.priority)
        .await
        .with_context(|| format!("Failed to relocate {}", relocation.vm_name))?;

    if wait_for_task(api, &task, &relocation.wait).await? {
        writeln!(out, "Linked Clone relocated successfully.")?;
        Ok(Outcome::Relocated)
    } else {
        writeln!(out, "Failure -: Linked clone cannot be relocated")?;
        Ok(Outcome::NotRelocated)
    }
}
