// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for vm-relocate integration tests
//!
//! A wiremock server stands in for vCenter. Each helper mounts the calls
//! one step of a relocation run makes.

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BASE: &str = "/sdk/vim25/8.0.1.0";
pub const TOKEN: &str = "52b6e1c4a9f03d77";

/// Get a Command for running the vm-relocate binary with a clean environment
pub fn relocate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vm-relocate").expect("Failed to find vm-relocate binary");
    for var in [
        "VIM_URL",
        "VIM_USERNAME",
        "VIM_PASSWORD",
        "VIM_API_RELEASE",
        "VIM_TLS_INSECURE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run vm-relocate against `server` off the async runtime
pub async fn run_relocate(server: &MockServer, args: &[&str]) -> std::process::Output {
    let url = format!("{}/sdk", server.uri());
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        relocate_cmd()
            .env("VIM_URL", url)
            .env("VIM_USERNAME", "admin")
            .env("VIM_PASSWORD", "hunter2")
            .args(args)
            .output()
            .expect("Failed to execute vm-relocate")
    })
    .await
    .expect("vm-relocate runner panicked")
}

pub fn moref(kind: &str, value: &str) -> Value {
    json!({"_typeName": "ManagedObjectReference", "type": kind, "value": value})
}

fn named(kind: &str, id: &str, name: &str) -> Value {
    json!({
        "_typeName": "ObjectContent",
        "obj": moref(kind, id),
        "propSet": [{
            "_typeName": "DynamicProperty",
            "name": "name",
            "val": {"_typeName": "string", "_value": name}
        }]
    })
}

/// Service content, login (once) and logout (once)
pub async fn mount_session(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/ServiceInstance/ServiceInstance/content")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_typeName": "ServiceContent",
            "rootFolder": moref("Folder", "group-d1"),
            "propertyCollector": moref("PropertyCollector", "propertyCollector"),
            "viewManager": moref("ViewManager", "ViewManager"),
            "sessionManager": moref("SessionManager", "SessionManager"),
            "about": {
                "_typeName": "AboutInfo",
                "name": "VMware vCenter Server",
                "fullName": "VMware vCenter Server 8.0.2 build-22385739",
                "apiVersion": "8.0.2.0"
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/SessionManager/SessionManager/Login")))
        .and(body_partial_json(json!({"userName": "admin", "password": "hunter2"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("vmware-api-session-id", TOKEN)
                .set_body_json(json!({
                    "_typeName": "UserSession",
                    "key": "52a0",
                    "userName": "VSPHERE.LOCAL\\admin"
                })),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/SessionManager/SessionManager/Logout")))
        .and(header("vmware-api-session-id", TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(server)
        .await;
}

/// Inventory of `kind` (`VirtualMachine` or `Datastore`) as `(id, name)` pairs
pub async fn mount_inventory(server: &MockServer, kind: &str, objects: &[(&str, &str)]) {
    let view = format!("view-{}", kind.to_lowercase());

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/ViewManager/ViewManager/CreateContainerView")))
        .and(body_partial_json(json!({"type": [kind]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(moref("ContainerView", &view)))
        .mount(server)
        .await;

    let contents: Vec<Value> = objects
        .iter()
        .map(|(id, name)| named(kind, id, name))
        .collect();
    Mock::given(method("POST"))
        .and(path(format!(
            "{BASE}/PropertyCollector/propertyCollector/RetrievePropertiesEx"
        )))
        .and(body_partial_json(json!({
            "specSet": [{"objectSet": [{"obj": moref("ContainerView", &view)}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_typeName": "RetrieveResult",
            "objects": contents
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/ContainerView/{view}/DestroyView")))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

/// `RelocateVM_Task` on `vm_id`, answering with task `task-101`
pub async fn mount_relocate(server: &MockServer, vm_id: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!("{BASE}/VirtualMachine/{vm_id}/RelocateVM_Task")))
        .and(header("vmware-api-session-id", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(moref("Task", "task-101")))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// `info` of task `task-101`
pub async fn mount_task_info(server: &MockServer, state: &str, error: Option<Value>) {
    let mut info = json!({
        "_typeName": "TaskInfo",
        "key": "task-101",
        "task": moref("Task", "task-101"),
        "name": "RelocateVM_Task",
        "state": state,
        "cancelled": false,
        "cancelable": true
    });
    if let Some(error) = error {
        info["error"] = error;
    }

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/Task/task-101/info")))
        .respond_with(ResponseTemplate::new(200).set_body_json(info))
        .mount(server)
        .await;
}

/// A `LocalizedMethodFault` as carried in `TaskInfo.error`
pub fn localized_fault(type_name: &str, message: &str) -> Value {
    json!({
        "_typeName": "LocalizedMethodFault",
        "fault": {"_typeName": type_name},
        "localizedMessage": message
    })
}
