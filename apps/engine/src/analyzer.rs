//! Analysis orchestrator — sequences extraction, parsing, scoring, and
//! summary rendering for one application, one ad-hoc upload, or a batch.
//!
//! Every public entry point returns a tagged [`AnalysisOutcome`] instead of
//! an error: expected failures (no resume, empty extraction, bad format) and
//! internal faults alike are folded into `{error, score: 0, analysis: None}`
//! so a caller walking a batch never has to unwind.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::extract;
use crate::matching::{
    score_match, summarize, CategoryScores, CategorySets, ExperienceComparison, JobRequirement,
    ResumeStructure, StructuredParser,
};
use crate::models::{Job, JobApplication, UploadedResume};

/// The JSON wire contract consumed by the presentation layer. Field names
/// and nesting are stable; storage round-trips this shape verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub resume_structure: ResumeStructure,
    pub job_requirements: JobRequirement,
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub matched: CategorySets,
    pub missing: CategorySets,
    pub experience: ExperienceComparison,
    pub summary: String,
}

/// Tagged result of one analysis. `error == None` iff `analysis` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub error: Option<String>,
    pub score: f64,
    pub analysis: Option<AnalysisPayload>,
}

impl AnalysisOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            score: 0.0,
            analysis: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// One entry of a batch analysis. Entries come back in input order; ranking
/// is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub application_id: Uuid,
    pub applicant: String,
    pub applied_at: DateTime<Utc>,
    pub analysis: AnalysisOutcome,
}

/// The matching engine's front door. Immutable after construction; share one
/// instance across threads freely.
#[derive(Debug, Default)]
pub struct ResumeAnalyzer {
    parser: StructuredParser,
    config: EngineConfig,
}

impl ResumeAnalyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            parser: StructuredParser::default(),
            config,
        }
    }

    /// Swaps in a parser with customized taxonomies.
    pub fn with_parser(config: EngineConfig, parser: StructuredParser) -> Self {
        Self { parser, config }
    }

    /// Analyzes an application's attached resume against its job.
    ///
    /// No storage side effects: callers persist the outcome through
    /// [`JobApplication::record_analysis`] if they want it kept.
    pub fn analyze(&self, application: &JobApplication) -> AnalysisOutcome {
        let path = match application.resume_path.as_deref() {
            Some(path) => path,
            None => return AnalysisOutcome::failure(EngineError::MissingResume.outcome_message()),
        };

        self.run_pipeline(path, &application.job)
            .unwrap_or_else(|err| self.report_failure(err, application.resume_name()))
    }

    /// Analyzes an uploaded file against a job without creating an
    /// application (bulk / ad-hoc screening).
    ///
    /// The upload is spooled to a scoped temp file that is removed on every
    /// exit path, success or failure.
    pub fn analyze_file(&self, upload: &UploadedResume, job: &Job) -> AnalysisOutcome {
        self.spool_and_analyze(upload, job)
            .unwrap_or_else(|err| self.report_failure(err, Some(upload.file_name.as_str())))
    }

    /// Analyzes each application independently. One item's failure never
    /// aborts its siblings; failed items carry their error in-line.
    pub fn analyze_batch(&self, applications: &[JobApplication]) -> Vec<BatchEntry> {
        applications
            .iter()
            .map(|application| BatchEntry {
                application_id: application.id,
                applicant: application.applicant.username.clone(),
                applied_at: application.applied_at,
                analysis: self.analyze(application),
            })
            .collect()
    }

    fn spool_and_analyze(
        &self,
        upload: &UploadedResume,
        job: &Job,
    ) -> Result<AnalysisOutcome, EngineError> {
        if upload.size > self.config.max_resume_bytes {
            return Err(EngineError::FileTooLarge {
                size: upload.size,
                limit: self.config.max_resume_bytes,
            });
        }

        let suffix = upload
            .extension()
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let mut builder = tempfile::Builder::new();
        builder.prefix("resume-").suffix(&suffix);
        let mut spool = match &self.config.tmp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        for chunk in upload.chunks() {
            spool.write_all(chunk)?;
        }
        spool.flush()?;

        // NamedTempFile removes the file when `spool` drops, covering every
        // exit path below.
        self.run_pipeline(spool.path(), job)
    }

    fn run_pipeline(&self, path: &Path, job: &Job) -> Result<AnalysisOutcome, EngineError> {
        info!(
            resume = %path.display(),
            job = %job.title,
            "starting resume analysis"
        );

        let text = extract::extract_text(path)?;
        info!(chars = text.len(), "extracted resume text");
        if text.trim().is_empty() {
            return Err(EngineError::EmptyExtraction);
        }

        let resume_structure = self.parser.parse_resume(&text);
        let job_requirements = self.parser.parse_job(job);
        let result = score_match(&resume_structure, &job_requirements);
        info!(score = result.overall_score, "scored resume against job");
        let summary = summarize(&result);

        Ok(AnalysisOutcome {
            error: None,
            score: result.overall_score,
            analysis: Some(AnalysisPayload {
                resume_structure,
                job_requirements,
                overall_score: result.overall_score,
                category_scores: result.category_scores,
                matched: result.matched,
                missing: result.missing,
                experience: result.experience,
                summary,
            }),
        })
    }

    fn report_failure(&self, err: EngineError, resume_name: Option<&str>) -> AnalysisOutcome {
        error!(
            resume = resume_name.unwrap_or("<none>"),
            error = %err,
            "resume analysis failed"
        );
        AnalysisOutcome::failure(err.outcome_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Applicant, Job, JobApplication};
    use bytes::Bytes;
    use std::io::Write as _;

    const RESUME_TEXT: &str = "5 years experience in Python and Django, \
        Bachelor's degree in Computer Science, strong communication skills";

    fn analyzer() -> ResumeAnalyzer {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        ResumeAnalyzer::default()
    }

    fn applicant(username: &str) -> Applicant {
        Applicant {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    fn demanding_job() -> Job {
        let mut job = Job::new("Backend Engineer", "Acme", "Build backend services");
        job.required_skills = vec![
            "python".to_string(),
            "django".to_string(),
            "react".to_string(),
        ];
        job.required_education = vec!["bachelor".to_string()];
        job.required_soft_skills = vec!["communication".to_string()];
        job.min_experience_years = 3;
        job
    }

    fn application_with_resume(dir: &tempfile::TempDir, contents: &str) -> JobApplication {
        let path = dir.path().join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        let mut app = JobApplication::new(demanding_job(), applicant("jdoe"));
        app.attach_resume(path);
        app
    }

    #[test]
    fn test_end_to_end_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = analyzer().analyze(&application_with_resume(&dir, RESUME_TEXT));

        assert!(outcome.is_success(), "error: {:?}", outcome.error);
        let analysis = outcome.analysis.unwrap();
        // tech 2/3, education 1/1, soft 1/1, experience 5 >= 3:
        // 0.50*66.67 + 0.20*100 + 0.15*100 + 0.15*100 = 83.33
        assert_eq!(analysis.overall_score, 83.33);
        assert_eq!(analysis.category_scores.technical_skills, 66.67);
        assert_eq!(analysis.category_scores.education, 100.0);
        assert_eq!(analysis.category_scores.soft_skills, 100.0);
        assert_eq!(analysis.category_scores.experience, 100.0);
        assert!(analysis
            .missing
            .technical_skills
            .contains("react"));
        assert!(analysis.experience.meets_requirement);
        assert!(analysis.summary.contains("MATCH SCORE: 83.33%"));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let app = application_with_resume(&dir, RESUME_TEXT);
        let analyzer = analyzer();

        let first = analyzer.analyze(&app);
        let second = analyzer.analyze(&app);

        let (a, b) = (first.analysis.unwrap(), second.analysis.unwrap());
        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.summary, b.summary);
        assert_eq!(
            serde_json::to_value(&a.category_scores).unwrap(),
            serde_json::to_value(&b.category_scores).unwrap()
        );
    }

    #[test]
    fn test_missing_resume_reports_error_without_panicking() {
        let app = JobApplication::new(demanding_job(), applicant("jdoe"));
        let outcome = analyzer().analyze(&app);

        assert_eq!(outcome.error.as_deref(), Some("No resume file found"));
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.analysis.is_none());
    }

    #[test]
    fn test_whitespace_only_extraction_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = analyzer().analyze(&application_with_resume(&dir, "  \n\t  "));

        assert_eq!(
            outcome.error.as_deref(),
            Some("Could not extract text from resume")
        );
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.analysis.is_none());
    }

    #[test]
    fn test_analyze_file_rejects_unknown_extension() {
        let upload = UploadedResume::from_bytes("resume.exe", Bytes::from_static(b"MZ binary"));
        let outcome = analyzer().analyze_file(&upload, &demanding_job());

        assert_eq!(
            outcome.error.as_deref(),
            Some("Unsupported file format: .exe")
        );
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.analysis.is_none());
    }

    #[test]
    fn test_analyze_file_happy_path() {
        let upload = UploadedResume::from_bytes("resume.txt", Bytes::from(RESUME_TEXT));
        let outcome = analyzer().analyze_file(&upload, &demanding_job());

        assert!(outcome.is_success(), "error: {:?}", outcome.error);
        assert_eq!(outcome.score, 83.33);
    }

    #[test]
    fn test_analyze_file_enforces_size_limit() {
        let analyzer = ResumeAnalyzer::new(EngineConfig {
            max_resume_bytes: 8,
            tmp_dir: None,
        });
        let upload = UploadedResume::from_bytes("resume.txt", Bytes::from(RESUME_TEXT));
        let outcome = analyzer.analyze_file(&upload, &demanding_job());

        assert!(outcome.error.unwrap().contains("too large"));
    }

    #[test]
    fn test_analyze_file_spools_into_configured_tmp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = ResumeAnalyzer::new(EngineConfig {
            tmp_dir: Some(dir.path().to_path_buf()),
            ..EngineConfig::default()
        });
        let upload = UploadedResume::from_bytes("resume.txt", Bytes::from(RESUME_TEXT));

        let outcome = analyzer.analyze_file(&upload, &demanding_job());
        assert!(outcome.is_success());

        // Spool file must be gone after the call returns.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good_one = application_with_resume(&dir, RESUME_TEXT);
        let broken = JobApplication::new(demanding_job(), applicant("noresume"));
        let good_two = application_with_resume(&dir, RESUME_TEXT);

        let entries = analyzer().analyze_batch(&[good_one.clone(), broken.clone(), good_two]);

        assert_eq!(entries.len(), 3);
        assert!(entries[0].analysis.is_success());
        assert_eq!(
            entries[1].analysis.error.as_deref(),
            Some("No resume file found")
        );
        assert_eq!(entries[1].application_id, broken.id);
        assert!(entries[2].analysis.is_success());
        // Input order preserved; no ranking applied.
        assert_eq!(entries[0].application_id, good_one.id);
    }

    #[test]
    fn test_payload_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = analyzer().analyze(&application_with_resume(&dir, RESUME_TEXT));

        let value = serde_json::to_value(&outcome).unwrap();
        for key in [
            "resume_structure",
            "job_requirements",
            "overall_score",
            "category_scores",
            "matched",
            "missing",
            "experience",
            "summary",
        ] {
            assert!(
                value["analysis"].get(key).is_some(),
                "payload is missing `{key}`"
            );
        }

        let back: AnalysisOutcome = serde_json::from_value(value).unwrap();
        assert_eq!(back.score, outcome.score);
    }
}
