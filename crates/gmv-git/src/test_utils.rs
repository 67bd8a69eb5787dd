//! Test utilities for the git runner
//!
//! Provides a scripted [`LocalCommandExecutor`] that records every call and
//! replays canned outputs, so retry behaviour can be tested without git.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::executor::{LocalCommandExecutor, RawOutput};

#[derive(Debug, Clone)]
enum Step {
    Output(RawOutput),
    SpawnError(std::io::ErrorKind),
}

/// Executor that replays a script of outputs.
///
/// Steps are consumed in order; the last step repeats once the script runs out.
#[derive(Debug)]
pub struct ScriptedExecutor {
    steps: Mutex<VecDeque<Step>>,
    last: Mutex<Step>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl ScriptedExecutor {
    fn from_steps(steps: Vec<Step>) -> Self {
        let last = steps
            .last()
            .cloned()
            .unwrap_or_else(|| Step::Output(RawOutput::success("")));
        Self {
            steps: Mutex::new(steps.into()),
            last: Mutex::new(last),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call returns `output`.
    pub fn always(output: RawOutput) -> Self {
        Self::from_steps(vec![Step::Output(output)])
    }

    /// Calls return `outputs` in order, then repeat the last one.
    pub fn sequence(outputs: Vec<RawOutput>) -> Self {
        Self::from_steps(outputs.into_iter().map(Step::Output).collect())
    }

    /// Every call fails to start the process.
    pub fn spawn_error(kind: std::io::ErrorKind) -> Self {
        Self::from_steps(vec![Step::SpawnError(kind)])
    }

    /// `(command_line, cwd)` of every call so far.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }

    fn next_step(&self) -> Step {
        let mut steps = self.steps.lock().expect("steps lock poisoned");
        match steps.pop_front() {
            Some(step) => {
                *self.last.lock().expect("last lock poisoned") = step.clone();
                step
            }
            None => self.last.lock().expect("last lock poisoned").clone(),
        }
    }
}

impl LocalCommandExecutor for ScriptedExecutor {
    async fn execute(&self, command_line: &str, cwd: &Path) -> std::io::Result<RawOutput> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((command_line.to_string(), cwd.to_path_buf()));

        match self.next_step() {
            Step::Output(output) => Ok(output),
            Step::SpawnError(kind) => Err(std::io::Error::new(kind, "scripted spawn failure")),
        }
    }
}

/// The output git produces when `.git/index.lock` is held in `repo`.
pub fn index_locked_output(repo: &str) -> RawOutput {
    RawOutput::failure(
        128,
        format!(
            "fatal: Unable to create '{}/.git/index.lock': File exists.\n\n\
             Another git process seems to be running in this repository, e.g.\n\
             an editor opened by 'git commit'. Please make sure all processes\n\
             are terminated then try again.\n",
            repo
        ),
    )
}
