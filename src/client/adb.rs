//! Async client for the Android Debug Bridge.
//!
//! Every collaborator that talks to the device goes through [`AdbShell`], so
//! repositories can be exercised against canned output in tests.

use crate::config::Config;
use crate::error::{GatewayError, GatewayResult};
use crate::observability::{MetricsTracker, Timer};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// What a device command printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs commands in the device shell.
#[async_trait]
pub trait AdbShell: Send + Sync {
    /// Run a command and return its stdout.
    async fn shell(&self, command: &str) -> GatewayResult<String>;

    /// Run a command and return both streams.
    ///
    /// Some device tools report failures on stderr with a zero exit status.
    async fn shell_output(&self, command: &str) -> GatewayResult<ShellOutput> {
        Ok(ShellOutput {
            stdout: self.shell(command).await?,
            stderr: String::new(),
        })
    }
}

/// Client that shells out to the `adb` executable.
#[derive(Debug, Clone)]
pub struct AdbClient {
    adb_path: String,
    serial: Option<String>,
    timeout: Duration,
    metrics: MetricsTracker,
}

impl AdbClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            adb_path: config.adb_path.clone(),
            serial: config.adb_serial.clone(),
            timeout: Duration::from_secs(config.adb_timeout_secs),
            metrics: MetricsTracker::new(),
        }
    }

    /// Share a metrics tracker with the rest of the server.
    pub fn with_metrics(mut self, metrics: MetricsTracker) -> Self {
        self.metrics = metrics;
        self
    }

    /// Run an adb command, targeting the configured device if any.
    ///
    /// The child is killed if the timeout fires or the future is dropped.
    async fn run(&self, args: &[&str]) -> GatewayResult<ShellOutput> {
        let mut full_args: Vec<&str> = Vec::with_capacity(args.len() + 2);
        if let Some(serial) = &self.serial {
            full_args.push("-s");
            full_args.push(serial);
        }
        full_args.extend_from_slice(args);

        debug!("adb {:?}", full_args);

        let timer = Timer::start();
        let result = self.execute(&full_args).await;
        self.metrics
            .track_adb_command(args.first().copied().unwrap_or(""), timer.elapsed_ms(), result.is_ok());
        result
    }

    async fn execute(&self, args: &[&str]) -> GatewayResult<ShellOutput> {
        let child = Command::new(&self.adb_path)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GatewayError::AdbUnavailable(format!(
                    "{} not found",
                    self.adb_path
                )))
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(GatewayError::Timeout(self.timeout.as_secs())),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GatewayError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                message: stderr.trim().to_string(),
            });
        }

        Ok(ShellOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[async_trait]
impl AdbShell for AdbClient {
    async fn shell(&self, command: &str) -> GatewayResult<String> {
        Ok(self.run(&["shell", command]).await?.stdout)
    }

    async fn shell_output(&self, command: &str) -> GatewayResult<ShellOutput> {
        self.run(&["shell", command]).await
    }
}

/// Quote one argument for the device's `sh`.
pub fn shell_quote(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=@%+,".contains(c))
    {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Join arguments into one device shell command line.
pub fn shell_command(args: &[&str]) -> String {
    args.iter()
        .map(|a| shell_quote(a))
        .collect::<Vec<_>>()
        .join(" ")
}
