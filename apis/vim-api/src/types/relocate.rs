// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine relocation types

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator, VariantNames};
use thiserror::Error;

use super::common::ManagedObjectReference;

/// How disk backings are handled when a linked clone changes datastore
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DiskMoveType {
    /// Move only the VM's own delta disks, leaving the shared parent in place
    MoveChildMostDiskBacking,
    /// Move every disk backing, keeping backings shared with other VMs shared
    MoveAllDiskBackingsAndAllowSharing,
}

/// A `--diskmovetype` value outside the accepted set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "diskmovetype option must be either moveChildMostDiskBacking or moveAllDiskBackingsAndAllowSharing"
)]
pub struct InvalidDiskMoveType(pub String);

impl FromStr for DiskMoveType {
    type Err = InvalidDiskMoveType;

    /// Case-insensitive match against the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiskMoveType::iter()
            .find(|t| t.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidDiskMoveType(s.to_string()))
    }
}

/// Scheduling priority of a relocation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum VirtualMachineMovePriority {
    DefaultPriority,
    HighPriority,
    LowPriority,
}

impl FromStr for VirtualMachineMovePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VirtualMachineMovePriority::iter()
            .find(|p| p.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "priority must be one of defaultPriority, highPriority, lowPriority (got '{}')",
                    s
                )
            })
    }
}

/// Relocation request: where the disks go and how shared backings are treated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "_typeName", rename_all = "camelCase")]
pub struct VirtualMachineRelocateSpec {
    /// Target datastore for the VM's files and disks
    pub datastore: ManagedObjectReference,
    /// Disk backing policy
    pub disk_move_type: DiskMoveType,
}

impl VirtualMachineRelocateSpec {
    pub fn new(datastore: ManagedObjectReference, disk_move_type: DiskMoveType) -> Self {
        Self {
            datastore,
            disk_move_type,
        }
    }
}

/// Parameters of `VirtualMachine.RelocateVM_Task`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelocateVmTaskRequest {
    pub spec: VirtualMachineRelocateSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<VirtualMachineMovePriority>,
}
