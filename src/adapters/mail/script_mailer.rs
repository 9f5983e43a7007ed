//! External mail-script integration. Implements MailPort.
//!
//! Runs `<runner> <script> <bcc> <subject> <body>`, by default
//! `osascript guess_send_email.applescript ...` to drive the local mail client.

use crate::domain::DomainError;
use crate::ports::MailPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info};

pub struct ScriptMailer {
    runner: String,
    script: PathBuf,
}

impl ScriptMailer {
    pub fn new(runner: impl Into<String>, script: impl AsRef<Path>) -> Self {
        Self {
            runner: runner.into(),
            script: script.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl MailPort for ScriptMailer {
    async fn send_bcc(&self, bcc: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        if !tokio::fs::try_exists(&self.script).await.unwrap_or(false) {
            return Err(DomainError::Dispatch(format!(
                "mail script not found: {}",
                self.script.display()
            )));
        }

        info!(runner = %self.runner, script = %self.script.display(), "dispatching draft");
        let status = Command::new(&self.runner)
            .arg(&self.script)
            .arg(bcc)
            .arg(subject)
            .arg(body)
            .status()
            .await
            .map_err(|e| DomainError::Dispatch(format!("failed to run {}: {}", self.runner, e)))?;

        if !status.success() {
            error!(%status, "mail script exited with failure");
            return Err(DomainError::Dispatch(format!("mail script exited with {}", status)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_script_is_dispatch_error() {
        let mailer = ScriptMailer::new("osascript", "/nonexistent/guess_send_email.applescript");
        let err = mailer.send_bcc("a@b.c", "hi", "body").await.unwrap_err();
        assert!(matches!(err, DomainError::Dispatch(_)));
    }
}
