// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for vim-client

use thiserror::Error;
use vim_api::{MethodFault, SESSION_HEADER};

/// Errors returned by [`crate::VimClient`]
#[derive(Error, Debug)]
pub enum Error {
    /// The service URL could not be turned into an API base
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (connect, TLS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected a call with a fault
    #[error("{method} failed (HTTP {status}): {fault}")]
    Fault {
        method: String,
        status: u16,
        fault: MethodFault,
    },

    /// Non-2xx response whose body is not a fault
    #[error("{method} returned HTTP {status}: {body}")]
    UnexpectedResponse {
        method: String,
        status: u16,
        body: String,
    },

    /// A 2xx response that does not decode as the expected type
    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// Login succeeded without handing out a session token
    #[error("Login response carried no {} header", SESSION_HEADER)]
    MissingSessionToken,

    /// The service content lacks a manager this client needs
    #[error("Service does not expose a {0}")]
    MissingManager(&'static str),
}

impl Error {
    /// Server fault behind this error, if there is one
    pub fn fault(&self) -> Option<&MethodFault> {
        match self {
            Error::Fault { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

/// Result alias for vim-client operations
pub type Result<T> = std::result::Result<T, Error>;
