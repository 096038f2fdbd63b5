//! The planning crew collaborator seam.
//!
//! The crew that actually deconstructs, researches, and prioritizes a task is
//! an external black box. Everything in this crate talks to it through
//! [`TaskRunner`]; the production implementation runs it as a child process.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Errors surfaced by a [`TaskRunner`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to start crew command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("failed to pass topic to crew process: {0}")]
    Io(#[from] std::io::Error),
    #[error("crew process exited with {status}: {stderr}")]
    CrewFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("crew output was not valid UTF-8: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
    #[error("{0}")]
    Failed(String),
}

/// The black-box collaborator that performs the actual planning work.
///
/// Contract: callable with a plain-text topic, returns a stringifiable
/// result, may fail with a descriptive error. The call runs to completion —
/// no timeout or cancellation is imposed here.
#[async_trait]
pub trait TaskRunner: Send + Sync {
    async fn run(&self, topic: &str) -> Result<String, RunnerError>;
}

/// Runs the crew as a child process.
///
/// The topic is written to the child's stdin; its stdout is the result.
/// A non-zero exit status is a crew failure and carries the captured stderr.
pub struct CrewCommandRunner {
    program: String,
    args: Vec<String>,
}

impl CrewCommandRunner {
    /// `command` is the program followed by its arguments; must be non-empty.
    pub fn new(command: &[String]) -> Result<Self, String> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| "crew command must not be empty".to_string())?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

#[async_trait]
impl TaskRunner for CrewCommandRunner {
    async fn run(&self, topic: &str) -> Result<String, RunnerError> {
        info!(program = %self.program, "starting crew process");

        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        // stdin handle is dropped after the write so the child sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(topic.as_bytes()).await?;
        }

        let output = child.wait_with_output().await?;
        debug!(status = %output.status, "crew process finished");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RunnerError::CrewFailed {
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(stdout.trim_end_matches('\n').to_string())
    }
}
