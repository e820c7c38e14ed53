//! The seam between `ipq` and the external tools it drives.
//!
//! High-level code only talks to [`CommandRunner`], which lets the tests
//! script every command while [`SystemCommands`] spawns real processes.

use std::collections::HashMap;
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use ipq_common::{IpqError, IpqResult};
use tokio::process::Command;
use tracing::debug;

pub const WHOIS: &str = "whois";
pub const NSLOOKUP: &str = "nslookup";
pub const PING: &str = "ping";

/// What a finished command left behind.
#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Whether `command` can be launched at all.
    fn is_available(&self, command: &str) -> bool;

    /// Launches `command` and waits for it to exit.
    async fn run(&self, command: &str, args: &[String]) -> IpqResult<CommandOutput>;
}

/// Runs `command` through `runner` and decodes its standard output.
///
/// Availability is checked first and a missing executable is never
/// spawned. The check and the spawn are not atomic. A nonzero exit status
/// is only logged; whatever the command printed is still returned.
pub async fn invoke(
    runner: &dyn CommandRunner,
    command: &str,
    args: &[String],
) -> IpqResult<String> {
    if !runner.is_available(command) {
        return Err(IpqError::MissingExecutable(command.to_string()));
    }

    debug!(command, ?args, "running external command");
    let output = runner.run(command, args).await?;

    if output.status != Some(0) {
        debug!(command, status = ?output.status, "command exited unsuccessfully");
    }

    String::from_utf8(output.stdout).map_err(|source| IpqError::Decode {
        command: command.to_string(),
        source,
    })
}

/// Spawns real child processes.
pub struct SystemCommands {
    timeout: Option<Duration>,
    available: Mutex<HashMap<String, bool>>,
}

impl SystemCommands {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            available: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CommandRunner for SystemCommands {
    /// Looks the command up on `PATH` once; the answer is kept for the rest of
    /// the process.
    fn is_available(&self, command: &str) -> bool {
        let mut cache = self
            .available
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        *cache
            .entry(command.to_string())
            .or_insert_with(|| which::which(command).is_ok())
    }

    async fn run(&self, command: &str, args: &[String]) -> IpqResult<CommandOutput> {
        let mut child = Command::new(command);
        child
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(after) => tokio::time::timeout(after, child.output())
                .await
                .map_err(|_| IpqError::Timeout {
                    command: command.to_string(),
                    after,
                })?,
            None => child.output().await,
        }
        .map_err(|source| IpqError::Spawn {
            command: command.to_string(),
            source,
        })?;

        Ok(CommandOutput {
            stdout: output.stdout,
            status: output.status.code(),
        })
    }
}
