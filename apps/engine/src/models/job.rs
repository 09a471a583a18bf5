use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job posting, as handed to the engine by the host system.
///
/// `required_skills` / `required_education` / `required_soft_skills` /
/// `min_experience_years` are the poster's explicit requirement fields; empty
/// vectors and zero years mean "not specified", in which case requirements
/// are extracted from `description` + `requirements` text instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub required_education: Vec<String>,
    #[serde(default)]
    pub required_soft_skills: Vec<String>,
    #[serde(default)]
    pub min_experience_years: u32,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn new(title: &str, company: &str, description: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            requirements: None,
            required_skills: Vec::new(),
            required_education: Vec::new(),
            required_soft_skills: Vec::new(),
            min_experience_years: 0,
            created_at: Utc::now(),
        }
    }

    /// True when the poster filled in at least one explicit requirement
    /// field. Any single populated field selects the all-explicit parsing
    /// path for every category.
    pub fn has_explicit_requirements(&self) -> bool {
        !self.required_skills.is_empty()
            || !self.required_education.is_empty()
            || !self.required_soft_skills.is_empty()
            || self.min_experience_years > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_job_has_no_explicit_requirements() {
        let job = Job::new("Backend Engineer", "Acme", "Build services");
        assert!(!job.has_explicit_requirements());
    }

    #[test]
    fn test_any_single_field_counts_as_explicit() {
        let mut job = Job::new("Backend Engineer", "Acme", "Build services");
        job.min_experience_years = 2;
        assert!(job.has_explicit_requirements());

        let mut job = Job::new("Backend Engineer", "Acme", "Build services");
        job.required_soft_skills = vec!["communication".to_string()];
        assert!(job.has_explicit_requirements());
    }
}
