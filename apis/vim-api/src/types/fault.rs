// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Fault types
//!
//! Faults reach a client two ways: as the body of a non-2xx response to a
//! method call, and as the `error` field of a finished `TaskInfo`. Both share
//! the `MethodFault` shape; the latter is wrapped in a `LocalizedMethodFault`
//! that adds a server-rendered message.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a fault's `faultMessage` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizableMessage {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Base of every server fault
///
/// The concrete fault type lives in `_typeName` (e.g. `InvalidLogin`,
/// `InvalidDatastore`, `NotAuthenticated`). Type-specific fields are kept
/// verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodFault {
    #[serde(rename = "_typeName")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fault_message: Vec<LocalizableMessage>,
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

impl MethodFault {
    /// Human-readable summary: the first server message, else the fault type
    pub fn summary(&self) -> String {
        self.fault_message
            .iter()
            .find_map(|m| m.message.clone())
            .unwrap_or_else(|| self.type_name.clone())
    }
}

impl fmt::Display for MethodFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        if summary == self.type_name {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{}: {}", self.type_name, summary)
        }
    }
}

/// A fault paired with the server's localized rendering of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedMethodFault {
    pub fault: MethodFault,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_message: Option<String>,
}

impl LocalizedMethodFault {
    /// The localized message, falling back to the fault's own summary
    pub fn message(&self) -> String {
        match &self.localized_message {
            Some(msg) if !msg.is_empty() => msg.clone(),
            _ => self.fault.summary(),
        }
    }
}

impl fmt::Display for LocalizedMethodFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for LocalizedMethodFault {}
