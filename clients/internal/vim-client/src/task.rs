// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Relocation and task lookup

use vim_api::{
    ManagedObjectReference, RelocateVmTaskRequest, TaskInfo, VirtualMachineMovePriority,
    VirtualMachineRelocateSpec,
};

use crate::client::VimClient;
use crate::error::Result;

impl VimClient {
    /// Start relocating `vm`; returns the task tracking the move
    pub async fn relocate_vm(
        &self,
        vm: &ManagedObjectReference,
        spec: &VirtualMachineRelocateSpec,
        priority: Option<VirtualMachineMovePriority>,
    ) -> Result<ManagedObjectReference> {
        let request = RelocateVmTaskRequest {
            spec: spec.clone(),
            priority,
        };
        let task: ManagedObjectReference = self.invoke(vm, "RelocateVM_Task", &request).await?;
        tracing::debug!(vm = %vm, task = %task, "Relocation submitted");
        Ok(task)
    }

    pub async fn task_info(&self, task: &ManagedObjectReference) -> Result<TaskInfo> {
        self.property(task, "info").await
    }
}
