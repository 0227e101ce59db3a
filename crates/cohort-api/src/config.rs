use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CASE_LIST_LIMIT: usize = 100;

/// Service configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON snapshot of stored case records. `None` serves no cases.
    pub cases_path: Option<PathBuf>,
    /// JSON snapshot of inference jobs. `None` serves no jobs.
    pub jobs_path: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    pub case_list_limit: usize,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda_runtime: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let path = |key: &str| {
            lookup(key)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
        };
        let cases_path = path("COHORT_CASES_PATH");
        let jobs_path = path("COHORT_JOBS_PATH");

        let bind_addr = lookup("COHORT_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid COHORT_BIND_ADDR {bind_addr:?}: {e}"))?;

        let case_list_limit = match lookup("COHORT_CASE_LIST_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid COHORT_CASE_LIST_LIMIT {raw:?}: {e}"))?,
            None => DEFAULT_CASE_LIST_LIMIT,
        };

        Ok(Self {
            cases_path,
            jobs_path,
            bind_addr,
            case_list_limit,
            lambda_runtime: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
