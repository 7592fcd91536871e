// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Name to handle resolution over the whole inventory

use std::collections::HashMap;

use vim_client::{InventoryKind, ManagedObjectReference, VimApi};

/// Find the `kind` object whose display name is exactly `name`.
///
/// The whole inventory under the root folder is listed and indexed by name.
/// Names are not unique on the server; when several objects share one, the
/// last in server order wins.
pub async fn resolve<A>(
    api: &A,
    kind: InventoryKind,
    name: &str,
) -> vim_client::Result<Option<ManagedObjectReference>>
where
    A: VimApi + ?Sized,
{
    let objects = api.list_names(api.root_folder(), kind).await?;
    let total = objects.len();

    let mut by_name: HashMap<String, ManagedObjectReference> = objects
        .into_iter()
        .map(|object| (object.name, object.obj))
        .collect();

    let found = by_name.remove(name);
    match &found {
        Some(obj) => tracing::debug!(%kind, name, %obj, "Resolved inventory name"),
        None => tracing::debug!(%kind, name, total, "No inventory object with that name"),
    }

    Ok(found)
}
