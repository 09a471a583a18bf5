use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analyzer::AnalysisOutcome;
use crate::errors::EngineError;
use crate::models::job::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// The applicant identity surface the engine needs for batch reporting.
/// Authentication and account management live in the host system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Persisted analysis state on an application. Overwritten on each re-run,
/// reset to defaults whenever the resume file is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub score: f64,
    pub payload: serde_json::Value,
    pub completed: bool,
    pub analyzed_at: Option<DateTime<Utc>>,
}

impl Default for AnalysisRecord {
    fn default() -> Self {
        Self {
            score: 0.0,
            payload: serde_json::Value::Object(serde_json::Map::new()),
            completed: false,
            analyzed_at: None,
        }
    }
}

/// One applicant's application to one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub job: Job,
    pub applicant: Applicant,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub message: Option<String>,
    pub resume_path: Option<PathBuf>,
    pub analysis: AnalysisRecord,
}

impl JobApplication {
    pub fn new(job: Job, applicant: Applicant) -> Self {
        Self {
            id: Uuid::new_v4(),
            job,
            applicant,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
            message: None,
            resume_path: None,
            analysis: AnalysisRecord::default(),
        }
    }

    /// Attaches (or replaces) the resume file. A replaced resume invalidates
    /// any stored analysis, so the record is reset to defaults.
    pub fn attach_resume(&mut self, path: impl Into<PathBuf>) {
        self.resume_path = Some(path.into());
        self.analysis = AnalysisRecord::default();
    }

    /// Stores an analysis outcome on the application record. The host
    /// persists the mutated record; the engine itself never touches storage.
    pub fn record_analysis(&mut self, outcome: &AnalysisOutcome) -> Result<(), EngineError> {
        self.analysis = AnalysisRecord {
            score: outcome.score,
            payload: serde_json::to_value(outcome)?,
            completed: outcome.error.is_none(),
            analyzed_at: Some(Utc::now()),
        };
        Ok(())
    }

    /// Resume file name for display and logging.
    pub fn resume_name(&self) -> Option<&str> {
        self.resume_path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> JobApplication {
        JobApplication::new(
            Job::new("Backend Engineer", "Acme", "Build services"),
            Applicant {
                id: Uuid::new_v4(),
                username: "jdoe".to_string(),
                email: "jdoe@example.com".to_string(),
            },
        )
    }

    #[test]
    fn test_attach_resume_resets_analysis() {
        let mut app = application();
        app.analysis = AnalysisRecord {
            score: 87.5,
            payload: serde_json::json!({"overall_score": 87.5}),
            completed: true,
            analyzed_at: Some(Utc::now()),
        };

        app.attach_resume("/uploads/resumes/jdoe/new.pdf");

        assert_eq!(app.analysis.score, 0.0);
        assert!(!app.analysis.completed);
        assert!(app.analysis.analyzed_at.is_none());
        assert_eq!(app.resume_name(), Some("new.pdf"));
    }

    #[test]
    fn test_record_analysis_marks_completion_only_on_success() {
        let mut app = application();

        app.record_analysis(&AnalysisOutcome::failure("No resume file found"))
            .unwrap();
        assert!(!app.analysis.completed);
        assert_eq!(app.analysis.score, 0.0);
        assert!(app.analysis.analyzed_at.is_some());

        let payload = app.analysis.payload.clone();
        assert_eq!(payload["error"], "No resume file found");
    }
}
