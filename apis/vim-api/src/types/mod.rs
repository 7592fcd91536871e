// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VI/JSON type definitions

pub mod common;
pub mod fault;
pub mod property;
pub mod relocate;
pub mod session;
pub mod task;

pub use common::*;
pub use fault::*;
pub use property::*;
pub use relocate::*;
pub use session::*;
pub use task::*;
