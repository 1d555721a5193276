use anyhow::Context;
use clap::Parser;
use diabetes_risk::config::load_record;
use diabetes_risk::utils::error::ErrorSeverity;
use diabetes_risk::utils::{logger, validation::Validate};
use diabetes_risk::{
    AssessmentReport, CliConfig, RandomJitter, RiskError, RiskScorer, Settings, TokioDelay,
    TomlConfig, ViewController,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting diabetes-risk CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let file_config = match &config.config {
        Some(path) => TomlConfig::from_file(path).unwrap_or_else(|e| exit_with(&e)),
        None => TomlConfig::default(),
    };
    if let Err(e) = file_config.validate() {
        exit_with(&e);
    }

    let settings = Settings::resolve(&config, &file_config);
    tracing::debug!("Effective settings: {:?}", settings);

    let base = match &config.input {
        Some(path) => load_record(path).unwrap_or_else(|e| exit_with(&e)),
        None => file_config.measurements.clone().unwrap_or_default(),
    };
    let record = config.apply_to(base);

    let mut view = ViewController::new(
        RiskScorer::new(settings.scoring_policy),
        TokioDelay,
        RandomJitter::new(settings.seed),
    )
    .with_analysis_delay(settings.analysis_delay);

    view.start()?;
    if !config.json {
        println!("🔍 Analyzing...");
    }

    let verdict = match view.submit(&record).await {
        Ok(verdict) => verdict.clone(),
        Err(e) => exit_with(&e),
    };

    let report = AssessmentReport::new(verdict);
    if config.json {
        println!("{}", report.to_json().context("failed to encode report")?);
    } else {
        print!("{}", report.render_text());
    }

    view.reset()?;
    tracing::info!("✅ Assessment finished, back to landing");
    Ok(())
}

fn exit_with(e: &RiskError) -> ! {
    if e.is_validation() {
        tracing::warn!("⚠️ Input rejected: {}", e);
    } else {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    }
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2, // rejected input
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
