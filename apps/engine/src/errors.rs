use thiserror::Error;

/// Engine-level error type.
///
/// Public entry points on [`crate::analyzer::ResumeAnalyzer`] never leak this
/// to callers — every variant is converted into the tagged
/// `{error, score: 0, analysis: None}` outcome at the orchestrator boundary.
/// Internal stages propagate it with `?`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No resume file found")]
    MissingResume,

    #[error("Could not extract text from resume")]
    EmptyExtraction,

    #[error("Unsupported file format: .{0}")]
    UnsupportedFormat(String),

    #[error("Resume file is too large ({size} bytes, limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Message written into the `error` field of a failed analysis outcome.
    ///
    /// Expected failures (missing file, empty text, bad format, oversized
    /// upload) surface verbatim; anything else is an internal fault and gets
    /// the generic prefix so callers can't start depending on its wording.
    pub fn outcome_message(&self) -> String {
        match self {
            EngineError::MissingResume
            | EngineError::EmptyExtraction
            | EngineError::UnsupportedFormat(_)
            | EngineError::FileTooLarge { .. } => self.to_string(),
            other => format!("Analysis failed: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_failures_surface_verbatim() {
        assert_eq!(
            EngineError::MissingResume.outcome_message(),
            "No resume file found"
        );
        assert_eq!(
            EngineError::UnsupportedFormat("exe".to_string()).outcome_message(),
            "Unsupported file format: .exe"
        );
    }

    #[test]
    fn test_internal_faults_get_generic_prefix() {
        let err = EngineError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.outcome_message().starts_with("Analysis failed:"));
    }
}
