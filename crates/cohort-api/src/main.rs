use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cohort_api::config::Config;
use cohort_api::state::AppState;
use cohort_storage::snapshot::SnapshotCaseSource;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let cases = match &config.cases_path {
        Some(path) => SnapshotCaseSource::load(path).await?,
        None => {
            tracing::info!("no case snapshot configured, starting with an empty case source");
            SnapshotCaseSource::default()
        }
    };

    let cases = match &config.jobs_path {
        Some(path) => cases.load_jobs(path).await?,
        None => cases,
    };

    let state = AppState {
        cases: Arc::new(cases),
        case_list_limit: config.case_list_limit,
    };
    let app = cohort_api::app(state);

    if config.lambda_runtime {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
