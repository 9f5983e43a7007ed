//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the per-profile pipeline lives in OutreachService.

use cold_outreach::adapters::enrichment::ScrapinAdapter;
use cold_outreach::adapters::llm::OpenAiAdapter;
use cold_outreach::adapters::mail::ScriptMailer;
use cold_outreach::adapters::ui::tui::TuiInputPort;
use cold_outreach::ports::{EnrichmentPort, InputPort, LlmPort, MailPort};
use cold_outreach::shared::config::AppConfig;
use cold_outreach::usecases::OutreachService;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Current-thread runtime: one profile at a time, every call awaited in order.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    cold_outreach::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, falling back to defaults");
        AppConfig::default()
    });
    let settings = Arc::new(cfg.outreach_settings());
    info!(
        institution = %settings.target_institution,
        template_mode = ?settings.template_mode,
        prompts_dir = %settings.prompts_dir.display(),
        "settings loaded"
    );

    let scrapin_key = cfg.scrapin_api_key();
    if scrapin_key.is_none() {
        warn!("SCRAPIN is not set; profile lookups will fail");
    }
    let openai_key = cfg.openai_api_key();
    if openai_key.is_none() {
        warn!("OPENAI is not set; classification and drafting will fail");
    }

    // --- Adapters ---
    let enrichment: Arc<dyn EnrichmentPort> = Arc::new(ScrapinAdapter::new(
        cfg.enrichment_api_url_or_default(),
        scrapin_key,
        cfg.http_timeout(),
    )?);
    let llm: Arc<dyn LlmPort> = Arc::new(OpenAiAdapter::new(
        cfg.llm_api_url_or_default(),
        openai_key,
        cfg.http_timeout(),
    )?);
    let mail: Arc<dyn MailPort> = Arc::new(ScriptMailer::new(
        cfg.mail_runner_or_default(),
        cfg.mail_script_or_default(),
    ));

    // --- Services ---
    let service = Arc::new(OutreachService::new(enrichment, llm, mail, settings));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(service));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
