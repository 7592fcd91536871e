// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! vSphere Web Services Client Library
//!
//! A small async client for the JSON encoding of the vSphere Web Services
//! API (VI/JSON, vSphere 8.0U1 and later). It covers what is needed to find
//! inventory objects by name, relocate a virtual machine, and follow the
//! resulting task.
//!
//! ## Usage
//!
//! ```ignore
//! use vim_client::{ConnectConfig, VimApi, VimClient};
//! use vim_api::InventoryKind;
//!
//! let config = ConnectConfig::new("https://vcenter.example.com/sdk", "administrator@vsphere.local", password);
//! let client = VimClient::connect(&config).await?;
//!
//! let vms = client.list_names(client.root_folder(), InventoryKind::VirtualMachine).await?;
//! for vm in &vms {
//!     println!("{} ({})", vm.name, vm.obj.value);
//! }
//!
//! client.logout().await?;
//! ```
//!
//! Consumers that want to run against a fake should program against the
//! [`VimApi`] trait rather than [`VimClient`] directly.

mod client;
mod error;
mod inventory;
mod task;
mod tls;

pub use client::{ConnectConfig, VimClient};
pub use error::{Error, Result};
pub use inventory::NamedObject;

// Re-export the wire types for convenience
pub use vim_api::{
    DiskMoveType, InventoryKind, LocalizedMethodFault, ManagedObjectReference, MethodFault,
    ServiceContent, TaskInfo, TaskInfoState, VirtualMachineMovePriority,
    VirtualMachineRelocateSpec,
};

use async_trait::async_trait;

/// Operations a relocation run needs from the management service
#[async_trait]
pub trait VimApi: Send + Sync {
    /// Root of the inventory hierarchy
    fn root_folder(&self) -> &ManagedObjectReference;

    /// Display name and handle of every `kind` object reachable under
    /// `container`, in the order the server reports them
    async fn list_names(
        &self,
        container: &ManagedObjectReference,
        kind: InventoryKind,
    ) -> Result<Vec<NamedObject>>;

    /// Submit `RelocateVM_Task` and return the task handle
    async fn relocate_vm(
        &self,
        vm: &ManagedObjectReference,
        spec: &VirtualMachineRelocateSpec,
        priority: Option<VirtualMachineMovePriority>,
    ) -> Result<ManagedObjectReference>;

    /// Current `info` of a task
    async fn task_info(&self, task: &ManagedObjectReference) -> Result<TaskInfo>;
}

#[async_trait]
impl VimApi for VimClient {
    fn root_folder(&self) -> &ManagedObjectReference {
        &self.service_content().root_folder
    }

    async fn list_names(
        &self,
        container: &ManagedObjectReference,
        kind: InventoryKind,
    ) -> Result<Vec<NamedObject>> {
        VimClient::list_names(self, container, kind).await
    }

    async fn relocate_vm(
        &self,
        vm: &ManagedObjectReference,
        spec: &VirtualMachineRelocateSpec,
        priority: Option<VirtualMachineMovePriority>,
    ) -> Result<ManagedObjectReference> {
        VimClient::relocate_vm(self, vm, spec, priority).await
    }

    async fn task_info(&self, task: &ManagedObjectReference) -> Result<TaskInfo> {
        VimClient::task_info(self, task).await
    }
}
