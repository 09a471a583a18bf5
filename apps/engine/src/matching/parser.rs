//! Structured parsing — turns free resume text or a job posting into the
//! normalized attribute records the scorer compares.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::taxonomy::TaxonomySet;
use crate::models::job::Job;

/// Experience patterns for resume text, evaluated in order; the first pattern
/// with at least one numeric match wins and the value is the max across that
/// pattern's matches.
const RESUME_EXPERIENCE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
    r"experience.*?(\d+)\+?\s*years?",
];

/// Experience patterns for job postings. Same policy, job-specific phrasing
/// ("minimum N years").
const JOB_EXPERIENCE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
    r"minimum.*?(\d+)\+?\s*years?",
];

/// Normalized attributes extracted from a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeStructure {
    pub technical_skills: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub experience_years: u32,
}

/// Normalized requirements extracted from a job posting (or taken directly
/// from its explicit requirement fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub required_technical_skills: BTreeSet<String>,
    pub required_education: BTreeSet<String>,
    pub required_soft_skills: BTreeSet<String>,
    pub required_experience_years: u32,
}

/// Where a job's requirements come from, resolved once per parse.
///
/// A job with ANY explicit field populated takes the all-explicit path;
/// there is no per-category fallback to text extraction for the fields left
/// empty. Partial explicit requirements therefore mean "the unset categories
/// have no requirement" (vacuous pass downstream).
#[derive(Debug)]
pub enum JobRequirementSource<'a> {
    Explicit {
        skills: &'a [String],
        education: &'a [String],
        soft_skills: &'a [String],
        min_years: u32,
    },
    FromText {
        description: &'a str,
        requirements: &'a str,
    },
}

impl<'a> JobRequirementSource<'a> {
    pub fn resolve(job: &'a Job) -> Self {
        if job.has_explicit_requirements() {
            JobRequirementSource::Explicit {
                skills: &job.required_skills,
                education: &job.required_education,
                soft_skills: &job.required_soft_skills,
                min_years: job.min_experience_years,
            }
        } else {
            JobRequirementSource::FromText {
                description: &job.description,
                requirements: job.requirements.as_deref().unwrap_or(""),
            }
        }
    }
}

/// Taxonomy-backed parser. Regexes are compiled once at construction; the
/// parser is immutable afterwards and safe to share across threads.
#[derive(Debug)]
pub struct StructuredParser {
    taxonomies: TaxonomySet,
    resume_experience: Vec<Regex>,
    job_experience: Vec<Regex>,
}

impl Default for StructuredParser {
    fn default() -> Self {
        Self::new(TaxonomySet::default())
    }
}

impl StructuredParser {
    pub fn new(taxonomies: TaxonomySet) -> Self {
        let compile = |patterns: &[&str]| {
            patterns
                .iter()
                // Patterns are compile-time constants; a failure here is a
                // programming error, not an input condition.
                .map(|p| Regex::new(p).expect("invalid built-in experience pattern"))
                .collect()
        };
        Self {
            taxonomies,
            resume_experience: compile(RESUME_EXPERIENCE_PATTERNS),
            job_experience: compile(JOB_EXPERIENCE_PATTERNS),
        }
    }

    pub fn taxonomies(&self) -> &TaxonomySet {
        &self.taxonomies
    }

    pub fn parse_resume(&self, text: &str) -> ResumeStructure {
        let lowered = text.to_lowercase();
        ResumeStructure {
            technical_skills: self.taxonomies.technical.found_in(&lowered),
            education: self.taxonomies.education.found_in(&lowered),
            soft_skills: self.taxonomies.soft_skills.found_in(&lowered),
            experience_years: extract_years(&lowered, &self.resume_experience),
        }
    }

    pub fn parse_job(&self, job: &Job) -> JobRequirement {
        match JobRequirementSource::resolve(job) {
            JobRequirementSource::Explicit {
                skills,
                education,
                soft_skills,
                min_years,
            } => JobRequirement {
                required_technical_skills: lowered_set(skills),
                required_education: lowered_set(education),
                required_soft_skills: lowered_set(soft_skills),
                required_experience_years: min_years,
            },
            JobRequirementSource::FromText {
                description,
                requirements,
            } => {
                let lowered = format!("{description} {requirements}").to_lowercase();
                JobRequirement {
                    required_technical_skills: self.taxonomies.technical.found_in(&lowered),
                    required_education: self.taxonomies.education.found_in(&lowered),
                    required_soft_skills: self.taxonomies.soft_skills.found_in(&lowered),
                    required_experience_years: extract_years(&lowered, &self.job_experience),
                }
            }
        }
    }
}

/// Ordered first-match-wins experience extraction. Returns 0 when no pattern
/// matches anywhere in the text.
fn extract_years(lowered_text: &str, patterns: &[Regex]) -> u32 {
    for pattern in patterns {
        let matched = pattern
            .captures_iter(lowered_text)
            .filter_map(|caps| caps[1].parse::<u32>().ok())
            .max();
        if let Some(years) = matched {
            return years;
        }
    }
    0
}

fn lowered_set(values: &[String]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
