// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! vSphere Web Services wire types
//!
//! Types for the JSON encoding of the vSphere Web Services API (VI/JSON),
//! shared by the HTTP client and its tests. Only the slice of the API needed
//! to find inventory objects by name, relocate a virtual machine, and follow
//! the resulting task is modeled here.
//!
//! Every call is addressed as
//! `{base}/sdk/vim25/{release}/{MoType}/{moId}/{MethodOrProperty}`. Data
//! objects carry a `_typeName` discriminator on the wire; the request types
//! below emit it and the response types tolerate it.

pub mod types;

pub use types::*;

/// API release used when the caller does not pick one.
pub const DEFAULT_API_RELEASE: &str = "8.0.1.0";

/// Response header carrying the session token after `Login`, and the request
/// header that must echo it on every later call.
pub const SESSION_HEADER: &str = "vmware-api-session-id";

/// Well-known managed object ID of the service instance.
pub const SERVICE_INSTANCE: &str = "ServiceInstance";
