use crate::client::{shell_command, AdbShell};
use crate::error::{GatewayError, GatewayResult};
use crate::repositories::traits::Launcher;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Starts VIEW intents with `am start`.
pub struct AdbLauncher {
    shell: Arc<dyn AdbShell>,
}

impl AdbLauncher {
    pub fn new(shell: Arc<dyn AdbShell>) -> Self {
        Self { shell }
    }

    fn view_command(uri: &str, package: Option<&str>) -> String {
        let mut args = vec!["am", "start", "-a", ACTION_VIEW, "-d", uri];
        if let Some(package) = package {
            args.push("-p");
            args.push(package);
        }
        shell_command(&args)
    }

    async fn start(&self, command: String) -> GatewayResult<()> {
        let output = self.shell.shell_output(&command).await?;
        debug!("am start: {}", output.stdout.trim());

        // am exits 0 for unresolvable intents and prints the error on either stream
        if let Some(line) = output
            .stderr
            .lines()
            .chain(output.stdout.lines())
            .find(|l| l.trim_start().starts_with("Error"))
        {
            return Err(GatewayError::CommandFailed {
                status: 0,
                message: line.trim().to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Launcher for AdbLauncher {
    async fn launch_deep_link(&self, package: &str, uri: &str) -> GatewayResult<()> {
        self.start(Self::view_command(uri, Some(package))).await
    }

    async fn open_contact_details(&self, lookup_uri: &str) -> GatewayResult<()> {
        self.start(Self::view_command(lookup_uri, None)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ShellOutput;

    struct CannedShell(&'static str);

    #[async_trait]
    impl AdbShell for CannedShell {
        async fn shell(&self, _command: &str) -> GatewayResult<String> {
            Ok(self.0.to_string())
        }
    }

    /// Shell that prints on both streams and exits 0.
    struct SplitShell {
        stdout: &'static str,
        stderr: &'static str,
    }

    #[async_trait]
    impl AdbShell for SplitShell {
        async fn shell(&self, _command: &str) -> GatewayResult<String> {
            Ok(self.stdout.to_string())
        }

        async fn shell_output(&self, _command: &str) -> GatewayResult<ShellOutput> {
            Ok(ShellOutput {
                stdout: self.stdout.to_string(),
                stderr: self.stderr.to_string(),
            })
        }
    }

    #[test]
    fn test_view_command_with_package() {
        assert_eq!(
            AdbLauncher::view_command(
                "https://api.whatsapp.com/send?phone=31612345678",
                Some("com.whatsapp")
            ),
            "am start -a android.intent.action.VIEW -d 'https://api.whatsapp.com/send?phone=31612345678' -p com.whatsapp"
        );
    }

    #[test]
    fn test_view_command_without_package() {
        assert_eq!(
            AdbLauncher::view_command("content://com.android.contacts/contacts/lookup/k/1", None),
            "am start -a android.intent.action.VIEW -d content://com.android.contacts/contacts/lookup/k/1"
        );
    }

    #[tokio::test]
    async fn test_start_ok() {
        let launcher = AdbLauncher::new(Arc::new(CannedShell(
            "Starting: Intent { act=android.intent.action.VIEW }\n",
        )));
        assert!(launcher.launch_deep_link("com.whatsapp", "https://x").await.is_ok());
    }

    #[tokio::test]
    async fn test_start_error_reported() {
        let launcher = AdbLauncher::new(Arc::new(CannedShell(
            "Starting: Intent { act=android.intent.action.VIEW }\nError: Activity not started, unable to resolve Intent\n",
        )));
        let result = launcher.open_contact_details("content://x").await;
        assert!(matches!(result, Err(GatewayError::CommandFailed { .. })));
    }

    #[tokio::test]
    async fn test_start_error_on_stderr_reported() {
        let launcher = AdbLauncher::new(Arc::new(SplitShell {
            stdout: "Starting: Intent { act=android.intent.action.VIEW pkg=com.whatsapp }\n",
            stderr: "Error: Activity not started, unable to resolve Intent { act=android.intent.action.VIEW pkg=com.whatsapp }\n",
        }));

        let result = launcher.launch_deep_link("com.whatsapp", "https://x").await;
        match result {
            Err(GatewayError::CommandFailed { message, .. }) => {
                assert!(message.starts_with("Error: Activity not started"))
            }
            other => panic!("Expected CommandFailed, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_start_warning_on_stderr_is_ok() {
        let launcher = AdbLauncher::new(Arc::new(SplitShell {
            stdout: "Starting: Intent { act=android.intent.action.VIEW }\n",
            stderr: "Warning: Activity not started, intent has been delivered to currently running top-most instance.\n",
        }));

        assert!(launcher.launch_deep_link("com.whatsapp", "https://x").await.is_ok());
    }
}
