use anyhow::Context;
use dottie_assessment::config::AppConfig;
use dottie_assessment::services::submission;
use dottie_assessment::{classify, AssessmentAnswers};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;

    // First argument is the answers file; none or "-" reads stdin
    let source = std::env::args().nth(1).filter(|p| p != "-");
    let raw = match &source {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read answers from stdin")?;
            buf
        }
    };

    let answers: AssessmentAnswers =
        serde_json::from_str(&raw).context("answers must be a JSON object")?;
    let result = classify(&answers);
    tracing::info!(
        pattern = %result.pattern,
        recommendations = result.recommendations.len(),
        "Assessment classified"
    );

    let output = match config.user_id {
        Some(user_id) => {
            let record = submission::build_record(user_id, &answers, &result, chrono::Utc::now())?;
            tracing::info!(assessment_id = %record.id, user_id = %user_id, "Built assessment record");
            serde_json::to_value(record)?
        }
        None => serde_json::to_value(&result)?,
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}
