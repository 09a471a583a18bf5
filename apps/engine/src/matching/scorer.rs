//! Weighted category-by-category scoring of a resume against a job's
//! requirements.
//!
//! Pure function of two structured records. Every emitted score is rounded to
//! two decimals; the overall score is the fixed weighted sum of the four
//! category scores.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::parser::{JobRequirement, ResumeStructure};

pub const TECHNICAL_WEIGHT: f64 = 0.50;
pub const EDUCATION_WEIGHT: f64 = 0.20;
pub const SOFT_SKILLS_WEIGHT: f64 = 0.15;
pub const EXPERIENCE_WEIGHT: f64 = 0.15;

/// Per-category scores in [0, 100], two-decimal rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical_skills: f64,
    pub education: f64,
    pub soft_skills: f64,
    pub experience: f64,
}

/// Per-category name sets; used for both the matched and the missing side of
/// the requirement partition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySets {
    pub technical_skills: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
}

/// Experience comparison detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceComparison {
    pub required_years: u32,
    pub resume_years: u32,
    pub meets_requirement: bool,
}

/// Full scoring output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub matched: CategorySets,
    pub missing: CategorySets,
    pub experience: ExperienceComparison,
}

/// Scores `resume` against `job`.
///
/// A category with no stated requirement scores 100 (vacuous pass) with empty
/// matched/missing sets. Experience under the required years earns fractional
/// credit rather than a cliff to zero.
pub fn score_match(resume: &ResumeStructure, job: &JobRequirement) -> MatchResult {
    let (tech_score, tech_matched, tech_missing) = score_category(
        &resume.technical_skills,
        &job.required_technical_skills,
    );
    let (edu_score, edu_matched, edu_missing) =
        score_category(&resume.education, &job.required_education);
    let (soft_score, soft_matched, soft_missing) =
        score_category(&resume.soft_skills, &job.required_soft_skills);

    let required_years = job.required_experience_years;
    let resume_years = resume.experience_years;
    let (exp_score, meets_requirement) = if required_years == 0 {
        (100.0, true)
    } else if resume_years >= required_years {
        (100.0, true)
    } else {
        (
            f64::from(resume_years) / f64::from(required_years) * 100.0,
            false,
        )
    };

    let overall = TECHNICAL_WEIGHT * tech_score
        + EDUCATION_WEIGHT * edu_score
        + SOFT_SKILLS_WEIGHT * soft_score
        + EXPERIENCE_WEIGHT * exp_score;

    MatchResult {
        overall_score: round2(overall),
        category_scores: CategoryScores {
            technical_skills: round2(tech_score),
            education: round2(edu_score),
            soft_skills: round2(soft_score),
            experience: round2(exp_score),
        },
        matched: CategorySets {
            technical_skills: tech_matched,
            education: edu_matched,
            soft_skills: soft_matched,
        },
        missing: CategorySets {
            technical_skills: tech_missing,
            education: edu_missing,
            soft_skills: soft_missing,
        },
        experience: ExperienceComparison {
            required_years,
            resume_years,
            meets_requirement,
        },
    }
}

/// Partitions the required set against the found set.
///
/// Returns (score, matched = R ∩ J, missing = J − R). An empty requirement
/// set is an automatic 100 with both sets empty.
fn score_category(
    found: &BTreeSet<String>,
    required: &BTreeSet<String>,
) -> (f64, BTreeSet<String>, BTreeSet<String>) {
    if required.is_empty() {
        return (100.0, BTreeSet::new(), BTreeSet::new());
    }
    let matched: BTreeSet<String> = required.intersection(found).cloned().collect();
    let missing: BTreeSet<String> = required.difference(found).cloned().collect();
    let score = matched.len() as f64 / required.len() as f64 * 100.0;
    (score, matched, missing)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
