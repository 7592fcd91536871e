// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task polling

use std::time::Duration;

use thiserror::Error;
use tokio::time::{Instant, sleep};
use vim_client::{
    LocalizedMethodFault, ManagedObjectReference, TaskInfo, TaskInfoState, VimApi,
};

#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Give up after this long; `None` waits forever
    pub timeout: Option<Duration>,
    /// Pause between status reads
    pub interval: Duration,
}

#[derive(Error, Debug)]
pub enum TaskError {
    /// The task recorded a fault
    #[error("Task {task} failed: {fault}")]
    Failed {
        task: ManagedObjectReference,
        fault: LocalizedMethodFault,
    },

    #[error(
        "Timed out after {}s waiting for task {task} (last state: {state})",
        .elapsed.as_secs()
    )]
    TimedOut {
        task: ManagedObjectReference,
        elapsed: Duration,
        state: TaskInfoState,
    },

    #[error("Failed to read status of task {task}: {source}")]
    Api {
        task: ManagedObjectReference,
        #[source]
        source: vim_client::Error,
    },
}

/// Poll `task` until it reaches `success` or `error`.
///
/// The first read happens immediately. Returns `Ok(true)` on success and
/// `Ok(false)` when the task ended in error without recording a fault.
/// A recorded fault is returned as [`TaskError::Failed`] whatever the final
/// state says.
pub async fn wait_for_task<A>(
    api: &A,
    task: &ManagedObjectReference,
    options: &WaitOptions,
) -> Result<bool, TaskError>
where
    A: VimApi + ?Sized,
{
    let start = Instant::now();

    loop {
        let info = api
            .task_info(task)
            .await
            .map_err(|source| TaskError::Api {
                task: task.clone(),
                source,
            })?;

        tracing::debug!(
            %task,
            state = %info.state,
            progress = ?info.progress,
            "Task status"
        );

        if info.state.is_terminal() {
            return settle(task, info);
        }

        if let Some(timeout) = options.timeout {
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Err(TaskError::TimedOut {
                    task: task.clone(),
                    elapsed,
                    state: info.state,
                });
            }
        }

        sleep(options.interval).await;
    }
}

fn settle(task: &ManagedObjectReference, info: TaskInfo) -> Result<bool, TaskError> {
    if let Some(fault) = info.error {
        return Err(TaskError::Failed {
            task: task.clone(),
            fault,
        });
    }
    Ok(info.state == TaskInfoState::Success)
}
