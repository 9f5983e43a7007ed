//! Implements InputPort. Inquire-based interactive loop.
//!
//! One LinkedIn URL per iteration; a failed profile never ends the session.
//! When stdin is not a terminal, URLs are read one per line until EOF.

use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::{DispatchOutcome, OutreachService};
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Text};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, info};

use super::progress;

/// Marker every accepted profile URL must contain.
pub const PROFILE_URL_MARKER: &str = "https://www.linkedin.com/in/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlRejection {
    #[error("Empty input, please enter a valid LinkedIn URL.")]
    Empty,
    #[error(
        "Invalid LinkedIn URL. Please enter a valid LinkedIn URL. Example: https://www.linkedin.com/in/janedoe"
    )]
    NotLinkedIn,
}

/// Trim and check operator input.
pub fn validate_profile_url(input: &str) -> Result<&str, UrlRejection> {
    let url = input.trim();
    if url.is_empty() {
        return Err(UrlRejection::Empty);
    }
    if !url.contains(PROFILE_URL_MARKER) {
        return Err(UrlRejection::NotLinkedIn);
    }
    Ok(url)
}

/// Prompt styling for every inquire prompt in the session.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<OutreachService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<OutreachService>) -> Self {
        Self { service }
    }

    /// Read URLs one per line from `reader` until EOF.
    pub async fn run_lines<R>(&self, reader: R) -> Result<(), DomainError>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| DomainError::Input(e.to_string()))?
        {
            self.accept(&line).await;
        }
        info!("input closed, ending session");
        Ok(())
    }

    async fn accept(&self, input: &str) {
        match validate_profile_url(input) {
            Ok(url) => self.handle(url).await,
            Err(rejection) => println!("{}", rejection),
        }
    }

    async fn handle(&self, url: &str) {
        let pb = progress::spinner("Researching profile and drafting email...");
        let result = self.service.process(url).await;
        pb.finish_and_clear();

        match result {
            Ok(report) => match report.dispatch {
                DispatchOutcome::Sent { recipients } => {
                    println!("Email composed successfully ({} candidate addresses in BCC)", recipients);
                }
                DispatchOutcome::NoCandidates => {
                    println!("No possible emails generated. Aborting.");
                }
                DispatchOutcome::Failed(e) => {
                    println!("Email composed, but sending failed: {}", e);
                }
            },
            Err(e) => {
                error!(url, error = ?e, "profile processing aborted");
                println!("Could not process this profile: {}", e);
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let input = match Text::new("Enter LinkedIn URL:").prompt() {
                Ok(s) => s,
                Err(InquireError::OperationCanceled) => continue,
                Err(InquireError::OperationInterrupted) => {
                    info!("session interrupted by operator");
                    return Ok(());
                }
                Err(InquireError::NotTTY) => {
                    info!("stdin is not a terminal, reading URLs line by line");
                    return self.run_lines(BufReader::new(tokio::io::stdin())).await;
                }
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            self.accept(&input).await;
        }
    }
}
