// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Inventory enumeration

use vim_api::{
    ContinueRetrievePropertiesExRequest, CreateContainerViewRequest, InventoryKind,
    ManagedObjectReference, PropertyFilterSpec, RetrieveOptions, RetrievePropertiesExRequest,
    RetrieveResult,
};

use crate::client::VimClient;
use crate::error::Result;

/// An inventory object and its display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedObject {
    pub name: String,
    pub obj: ManagedObjectReference,
}

impl NamedObject {
    pub fn new(name: impl Into<String>, obj: ManagedObjectReference) -> Self {
        Self {
            name: name.into(),
            obj,
        }
    }
}

impl VimClient {
    /// List every `kind` object under `container` (recursively) with its name
    ///
    /// Uses a temporary container view, which is destroyed afterwards even
    /// when the listing itself fails.
    pub async fn list_names(
        &self,
        container: &ManagedObjectReference,
        kind: InventoryKind,
    ) -> Result<Vec<NamedObject>> {
        let request = CreateContainerViewRequest {
            container: container.clone(),
            types: vec![kind.to_string()],
            recursive: true,
        };
        let view: ManagedObjectReference = self
            .invoke(self.view_manager()?, "CreateContainerView", &request)
            .await?;

        let listed = self.collect_names(&view, kind).await;

        if let Err(e) = self.invoke_void(&view, "DestroyView").await {
            tracing::warn!(view = %view, error = %e, "Failed to destroy container view");
        }

        let listed = listed?;
        tracing::debug!(kind = %kind, count = listed.len(), "Listed inventory");
        Ok(listed)
    }

    async fn collect_names(
        &self,
        view: &ManagedObjectReference,
        kind: InventoryKind,
    ) -> Result<Vec<NamedObject>> {
        let collector = &self.service_content().property_collector;
        let request = RetrievePropertiesExRequest {
            spec_set: vec![PropertyFilterSpec::names_through_view(
                view.clone(),
                kind,
                "name",
            )],
            options: RetrieveOptions::default(),
        };

        let mut named = Vec::new();
        let mut page: Option<RetrieveResult> = self
            .invoke_optional(collector, "RetrievePropertiesEx", &request)
            .await?;

        while let Some(result) = page {
            for object in result.objects {
                let name = object.property_str("name").map(str::to_string);
                if let Some(name) = name {
                    named.push(NamedObject::new(name, object.obj));
                }
            }

            page = match result.token {
                Some(token) => {
                    self.invoke_optional(
                        collector,
                        "ContinueRetrievePropertiesEx",
                        &ContinueRetrievePropertiesExRequest { token },
                    )
                    .await?
                }
                None => None,
            };
        }

        Ok(named)
    }
}
