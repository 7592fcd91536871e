// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! TLS provider setup
//!
//! reqwest is built against rustls without a bundled crypto provider, so the
//! process-wide default has to be installed before the first client is built.

/// Install the ring provider as the process default
///
/// A second call is a no-op; the provider chosen first stays in place.
pub(crate) fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
