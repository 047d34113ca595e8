//! Sink that writes each submission to a file

use super::traits::{SubmissionReceipt, SubmissionSink};
use crate::state::quiz::{FormPayload, QuizDocument};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use uuid::Uuid;

/// Writes `quiz-<timestamp>-<id>.form` with the form-encoded body and a
/// `.json` sidecar holding the decoded quiz
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SubmissionSink for FileSink {
    async fn submit(&self, payload: &FormPayload) -> Result<SubmissionReceipt> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating {}", self.dir.display()))?;

        let id = Uuid::new_v4();
        let submitted_at = Utc::now();
        let stem = format!("quiz-{}-{}", submitted_at.format("%Y%m%d-%H%M%S"), id);

        let body = payload.to_urlencoded();
        let location = self.dir.join(format!("{stem}.form"));
        tokio::fs::write(&location, &body)
            .await
            .with_context(|| format!("writing {}", location.display()))?;

        // The sidecar is decoded from the stored body so both files agree
        let document = QuizDocument::from_payload(&FormPayload::from_urlencoded(&body));
        let sidecar = self.dir.join(format!("{stem}.json"));
        tokio::fs::write(&sidecar, serde_json::to_string_pretty(&document)?)
            .await
            .with_context(|| format!("writing {}", sidecar.display()))?;

        tracing::info!(
            path = %location.display(),
            fields = payload.pairs().len(),
            bytes = body.len(),
            questions = document.questions.len(),
            "submission stored"
        );

        Ok(SubmissionReceipt {
            id,
            location,
            bytes: body.len(),
            submitted_at,
        })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
