// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory `VimApi` for unit tests

#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vim_client::{
    Error, InventoryKind, LocalizedMethodFault, ManagedObjectReference, MethodFault, NamedObject,
    Result, TaskInfo, TaskInfoState, VimApi, VirtualMachineMovePriority,
    VirtualMachineRelocateSpec,
};

pub fn moref(kind: &str, value: &str) -> ManagedObjectReference {
    ManagedObjectReference::new(kind, value)
}

pub fn fault(type_name: &str, message: &str) -> LocalizedMethodFault {
    LocalizedMethodFault {
        fault: MethodFault {
            type_name: type_name.to_string(),
            fault_message: Vec::new(),
            details: BTreeMap::new(),
        },
        localized_message: Some(message.to_string()),
    }
}

pub fn task_info(state: TaskInfoState, error: Option<LocalizedMethodFault>) -> TaskInfo {
    TaskInfo {
        key: "task-7".to_string(),
        task: moref("Task", "task-7"),
        name: Some("RelocateVM_Task".to_string()),
        description_id: None,
        entity: None,
        entity_name: None,
        state,
        cancelled: false,
        cancelable: true,
        error,
        progress: None,
        queue_time: None,
        start_time: None,
        complete_time: None,
    }
}

/// A submitted relocation as seen by the fake
#[derive(Debug, Clone)]
pub struct Submission {
    pub vm: ManagedObjectReference,
    pub spec: VirtualMachineRelocateSpec,
    pub priority: Option<VirtualMachineMovePriority>,
}

/// Scripted inventory and task behaviour with call recording
pub struct FakeVim {
    root: ManagedObjectReference,
    vms: Vec<NamedObject>,
    datastores: Vec<NamedObject>,
    // The last entry repeats once the script runs out
    task_script: Mutex<VecDeque<TaskInfo>>,
    relocate_fault: Option<MethodFault>,
    listed: Mutex<Vec<InventoryKind>>,
    submissions: Mutex<Vec<Submission>>,
    polls: AtomicUsize,
}

impl FakeVim {
    pub fn new() -> Self {
        Self {
            root: moref("Folder", "group-d1"),
            vms: Vec::new(),
            datastores: Vec::new(),
            task_script: Mutex::new(VecDeque::new()),
            relocate_fault: None,
            listed: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            polls: AtomicUsize::new(0),
        }
    }

    pub fn with_vm(mut self, name: &str, id: &str) -> Self {
        self.vms
            .push(NamedObject::new(name, moref("VirtualMachine", id)));
        self
    }

    pub fn with_datastore(mut self, name: &str, id: &str) -> Self {
        self.datastores
            .push(NamedObject::new(name, moref("Datastore", id)));
        self
    }

    pub fn with_task_states(self, states: impl IntoIterator<Item = TaskInfo>) -> Self {
        self.task_script.lock().unwrap().extend(states);
        self
    }

    pub fn with_relocate_fault(mut self, fault: MethodFault) -> Self {
        self.relocate_fault = Some(fault);
        self
    }

    pub fn listed(&self) -> Vec<InventoryKind> {
        self.listed.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VimApi for FakeVim {
    fn root_folder(&self) -> &ManagedObjectReference {
        &self.root
    }

    async fn list_names(
        &self,
        container: &ManagedObjectReference,
        kind: InventoryKind,
    ) -> Result<Vec<NamedObject>> {
        assert_eq!(container, &self.root);
        self.listed.lock().unwrap().push(kind);
        Ok(match kind {
            InventoryKind::VirtualMachine => self.vms.clone(),
            InventoryKind::Datastore => self.datastores.clone(),
        })
    }

    async fn relocate_vm(
        &self,
        vm: &ManagedObjectReference,
        spec: &VirtualMachineRelocateSpec,
        priority: Option<VirtualMachineMovePriority>,
    ) -> Result<ManagedObjectReference> {
        self.submissions.lock().unwrap().push(Submission {
            vm: vm.clone(),
            spec: spec.clone(),
            priority,
        });
        match &self.relocate_fault {
            Some(fault) => Err(Error::Fault {
                method: "RelocateVM_Task".to_string(),
                status: 500,
                fault: fault.clone(),
            }),
            None => Ok(moref("Task", "task-7")),
        }
    }

    async fn task_info(&self, task: &ManagedObjectReference) -> Result<TaskInfo> {
        assert_eq!(task, &moref("Task", "task-7"));
        self.polls.fetch_add(1, Ordering::SeqCst);

        let mut script = self.task_script.lock().unwrap();
        let info = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().cloned()
        };
        info.ok_or_else(|| Error::UnexpectedResponse {
            method: "info".to_string(),
            status: 500,
            body: "no scripted task state".to_string(),
        })
    }
}
