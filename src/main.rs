use anyhow::Context;
use dictionary_contract::configuration::get_configuration;
use dictionary_contract::contract::capture;
use dictionary_contract::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing `.env` is fine, the credential may come from the real environment
    let _ = dotenvy::dotenv();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let subscriber = get_subscriber(
        "dictionary_contract".into(),
        configuration.telemetry.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let client = configuration
        .dictionary
        .client()
        .context("Failed to build the dictionary API client.")?;
    let run = capture(&client, &configuration.dictionary.credentials())
        .await
        .context("Failed to capture the dictionary API responses.")?;

    let report = run.verify();
    for check in report.checks() {
        if check.passed {
            tracing::info!(group = %check.group, "{}", check.description);
        } else {
            tracing::error!(
                group = %check.group,
                expected = %check.expected,
                observed = %check.observed,
                "{}",
                check.description
            );
        }
    }

    if report.is_satisfied() {
        tracing::info!("The dictionary API honours its contract");
        Ok(())
    } else {
        Err(anyhow::anyhow!("{}", report))
    }
}
