//! Trait abstraction for submission sinks to enable mocking in tests

use crate::state::quiz::FormPayload;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use uuid::Uuid;

/// What a sink reports back after storing a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    /// Where the form-encoded body ended up
    pub location: PathBuf,
    pub bytes: usize,
    pub submitted_at: DateTime<Utc>,
}

/// Receiver of accepted submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Store one accepted payload
    async fn submit(&self, payload: &FormPayload) -> Result<SubmissionReceipt>;

    /// Human readable destination, shown in the status bar
    fn describe(&self) -> String;
}
