use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use cohort_core::error::CoreError;
use cohort_core::models::case::CaseRecord;
use cohort_core::models::job::InferenceJob;

use crate::cases::CaseSource;
use crate::error::StorageError;

/// In-memory source built from key-value snapshots of the case and job hashes.
#[derive(Debug, Default, Clone)]
pub struct SnapshotCaseSource {
    records: BTreeMap<String, CaseRecord>,
    jobs: BTreeMap<String, InferenceJob>,
}

impl SnapshotCaseSource {
    pub fn from_records(records: impl IntoIterator<Item = CaseRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
            jobs: BTreeMap::new(),
        }
    }

    /// Replace the job set.
    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = InferenceJob>) -> Self {
        self.jobs = jobs.into_iter().map(|j| (j.id.clone(), j)).collect();
        self
    }

    /// Parse a case snapshot: either a map of `id -> record` or an array of
    /// records. Values may be JSON-encoded strings. Malformed entries are
    /// skipped.
    pub fn from_json(snapshot: Value) -> Result<Self, StorageError> {
        let records = parse_hash(snapshot, "case", CaseRecord::from_json)?;
        Ok(Self::from_records(records))
    }

    /// Parse a job snapshot, in the same shapes as [`Self::from_json`].
    pub fn with_jobs_json(self, snapshot: Value) -> Result<Self, StorageError> {
        let jobs = parse_hash(snapshot, "job", InferenceJob::from_json)?;
        Ok(self.with_jobs(jobs))
    }

    /// Load a case snapshot file from disk.
    pub async fn load(path: &Path) -> Result<Self, StorageError> {
        Self::from_json(read_snapshot(path).await?)
    }

    /// Load a job snapshot file from disk into this source.
    pub async fn load_jobs(self, path: &Path) -> Result<Self, StorageError> {
        let snapshot = read_snapshot(path).await?;
        self.with_jobs_json(snapshot)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

async fn read_snapshot(path: &Path) -> Result<Value, StorageError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| StorageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn parse_hash<T>(
    snapshot: Value,
    kind: &'static str,
    parse: impl Fn(Value) -> Result<T, CoreError>,
) -> Result<Vec<T>, StorageError> {
    let entries: Vec<(Option<String>, Value)> = match snapshot {
        Value::Object(map) => map.into_iter().map(|(k, v)| (Some(k), v)).collect(),
        Value::Array(items) => items.into_iter().map(|v| (None, v)).collect(),
        Value::Null => return Err(StorageError::UnexpectedShape("null")),
        Value::Bool(_) => return Err(StorageError::UnexpectedShape("boolean")),
        Value::Number(_) => return Err(StorageError::UnexpectedShape("number")),
        Value::String(_) => return Err(StorageError::UnexpectedShape("string")),
    };

    let mut parsed = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match decode_entry(value).and_then(&parse) {
            Ok(item) => parsed.push(item),
            Err(e) => {
                tracing::warn!(kind, key = ?key, error = %e, "skipping malformed snapshot entry");
            }
        }
    }

    tracing::info!(kind, count = parsed.len(), "loaded snapshot");
    Ok(parsed)
}

/// Stored values may be JSON documents encoded as strings.
fn decode_entry(value: Value) -> Result<Value, CoreError> {
    match value {
        Value::String(encoded) => Ok(serde_json::from_str(&encoded)?),
        other => Ok(other),
    }
}

impl CaseSource for SnapshotCaseSource {
    fn list_cases(&self, limit: Option<usize>) -> Result<Vec<CaseRecord>, StorageError> {
        let take = limit.unwrap_or(usize::MAX);
        Ok(self.records.values().take(take).cloned().collect())
    }

    fn get_case(&self, id: &str) -> Result<CaseRecord, StorageError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }

    fn list_jobs(&self) -> Result<Vec<InferenceJob>, StorageError> {
        let mut jobs: Vec<InferenceJob> = self.jobs.values().cloned().collect();
        // Ids break ties, since the map already yields them in id order.
        jobs.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(jobs)
    }

    fn get_job(&self, id: &str) -> Result<InferenceJob, StorageError> {
        self.jobs
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::JobNotFound { id: id.to_string() })
    }
}
