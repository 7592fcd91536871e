// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Property collector and view types
//!
//! Listing objects of one type under a folder takes three calls: create a
//! container view over the folder, ask the property collector for the `name`
//! of every object the view exposes, then destroy the view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{InventoryKind, ManagedObjectReference};

/// Parameters of `ViewManager.CreateContainerView`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerViewRequest {
    pub container: ManagedObjectReference,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub recursive: bool,
}

/// Which properties to fetch for objects of one type
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_typeName", rename_all = "camelCase")]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
    pub path_set: Vec<String>,
}

/// Walk from one object to others through a reference-valued property
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_typeName", rename_all = "camelCase")]
pub struct TraversalSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    pub skip: bool,
}

/// Starting object of a property filter
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_typeName", rename_all = "camelCase")]
pub struct ObjectSpec {
    pub obj: ManagedObjectReference,
    pub skip: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_set: Vec<TraversalSpec>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_typeName", rename_all = "camelCase")]
pub struct PropertyFilterSpec {
    pub prop_set: Vec<PropertySpec>,
    pub object_set: Vec<ObjectSpec>,
}

impl PropertyFilterSpec {
    /// Fetch `property` of every object of `kind` exposed by a container view
    pub fn names_through_view(
        view: ManagedObjectReference,
        kind: InventoryKind,
        property: &str,
    ) -> Self {
        Self {
            prop_set: vec![PropertySpec {
                kind: kind.to_string(),
                all: Some(false),
                path_set: vec![property.to_string()],
            }],
            object_set: vec![ObjectSpec {
                obj: view,
                skip: true,
                select_set: vec![TraversalSpec {
                    name: "traverseEntities".to_string(),
                    kind: "ContainerView".to_string(),
                    path: "view".to_string(),
                    skip: false,
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "_typeName", rename_all = "camelCase")]
pub struct RetrieveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<i32>,
}

/// Parameters of `PropertyCollector.RetrievePropertiesEx`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievePropertiesExRequest {
    pub spec_set: Vec<PropertyFilterSpec>,
    pub options: RetrieveOptions,
}

/// Parameters of `PropertyCollector.ContinueRetrievePropertiesEx`
#[derive(Debug, Clone, Serialize)]
pub struct ContinueRetrievePropertiesExRequest {
    pub token: String,
}

/// One page of property collector results
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveResult {
    /// Present when more pages remain
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub objects: Vec<ObjectContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectContent {
    pub obj: ManagedObjectReference,
    #[serde(default)]
    pub prop_set: Vec<DynamicProperty>,
}

impl ObjectContent {
    /// String value of the named property, if present
    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.prop_set
            .iter()
            .find(|p| p.name == name)
            .and_then(DynamicProperty::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DynamicProperty {
    pub name: String,
    pub val: Value,
}

impl DynamicProperty {
    /// Primitive values arrive boxed as `{"_typeName": "string", "_value": ...}`
    pub fn as_str(&self) -> Option<&str> {
        match &self.val {
            Value::String(s) => Some(s),
            Value::Object(map) => map.get("_value").and_then(Value::as_str),
            _ => None,
        }
    }
}
