//! Human-readable summary rendering for a scored match.
//!
//! Deterministic formatting of a [`MatchResult`] — no re-derivation of
//! scores, no randomness.

use std::fmt::Write;

use crate::matching::scorer::MatchResult;

/// Display caps for the matched line: 6 technical + 2 education + 2 soft
/// entries collected, 8 shown.
const MATCHED_CAPS: (usize, usize, usize) = (6, 2, 2);
const MATCHED_SHOWN: usize = 8;

/// Display caps for the missing line: 4 + 1 + 1 collected, 6 shown.
const MISSING_CAPS: (usize, usize, usize) = (4, 1, 1);
const MISSING_SHOWN: usize = 6;

/// Renders the recruiter-facing verdict for a match result.
pub fn summarize(result: &MatchResult) -> String {
    let score = result.overall_score;
    let (rating, action) = rating_for(score);

    let mut out = String::new();
    let _ = writeln!(out, "MATCH SCORE: {}% - {rating} ({action})", fmt2(score));
    out.push('\n');

    let scores = &result.category_scores;
    let _ = writeln!(
        out,
        "Technical: {}% | Education: {}% | Soft Skills: {}% | Experience: {}%",
        fmt2(scores.technical_skills),
        fmt2(scores.education),
        fmt2(scores.soft_skills),
        fmt2(scores.experience),
    );
    out.push('\n');

    let matched = collect_capped(
        &result.matched.technical_skills,
        &result.matched.education,
        &result.matched.soft_skills,
        MATCHED_CAPS,
    );
    if !matched.is_empty() {
        out.push_str(&entry_line("[+] MATCHED", &matched, MATCHED_SHOWN));
    }

    let missing = collect_capped(
        &result.missing.technical_skills,
        &result.missing.education,
        &result.missing.soft_skills,
        MISSING_CAPS,
    );
    if !missing.is_empty() {
        out.push_str(&entry_line("[-] MISSING", &missing, MISSING_SHOWN));
    }

    let exp = &result.experience;
    if exp.required_years > 0 {
        if exp.meets_requirement {
            let _ = write!(
                out,
                "\n[!] Experience: {}+ years (meets {}+ requirement)\n",
                exp.resume_years, exp.required_years
            );
        } else {
            let _ = write!(
                out,
                "\n[!] Experience: {} years (needs {}+ years)\n",
                exp.resume_years, exp.required_years
            );
        }
    }

    let _ = write!(out, "\nRECOMMENDATION: {}", recommendation_for(score));
    out
}

/// Rating bands, inclusive at the lower bound.
fn rating_for(score: f64) -> (&'static str, &'static str) {
    if score >= 90.0 {
        ("EXCEPTIONAL", "HIGHLY RECOMMENDED")
    } else if score >= 80.0 {
        ("EXCELLENT", "STRONGLY RECOMMENDED")
    } else if score >= 70.0 {
        ("GOOD", "RECOMMENDED")
    } else if score >= 60.0 {
        ("FAIR", "CONSIDER WITH CAUTION")
    } else if score >= 50.0 {
        ("MARGINAL", "BORDERLINE")
    } else {
        ("POOR", "NOT RECOMMENDED")
    }
}

/// Closing recommendation, same bands as the rating.
fn recommendation_for(score: f64) -> &'static str {
    if score >= 90.0 {
        "Fast-track to interview - exceptional alignment with the role"
    } else if score >= 80.0 {
        "Schedule interview - well qualified for role"
    } else if score >= 70.0 {
        "Solid candidate with minor gaps - assess learning ability"
    } else if score >= 60.0 {
        "Has potential but notable gaps - probe depth carefully"
    } else if score >= 50.0 {
        "Borderline fit - would need significant development"
    } else {
        "Does not meet minimum requirements"
    }
}

/// Collects up to the per-category caps, in the sets' sorted order:
/// technical first, then education, then soft skills.
fn collect_capped<'a>(
    technical: &'a std::collections::BTreeSet<String>,
    education: &'a std::collections::BTreeSet<String>,
    soft: &'a std::collections::BTreeSet<String>,
    caps: (usize, usize, usize),
) -> Vec<&'a str> {
    let mut entries: Vec<&str> = Vec::new();
    entries.extend(technical.iter().take(caps.0).map(String::as_str));
    entries.extend(education.iter().take(caps.1).map(String::as_str));
    entries.extend(soft.iter().take(caps.2).map(String::as_str));
    entries
}

fn entry_line(label: &str, entries: &[&str], shown: usize) -> String {
    let mut line = format!("{label}: {}", entries[..entries.len().min(shown)].join(", "));
    if entries.len() > shown {
        let _ = write!(line, " (+{} more)", entries.len() - shown);
    }
    line.push('\n');
    line
}

/// Two-decimal score rendering ("66.67", "100.00").
fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}
