//! Keyword taxonomies — canonical skill names mapped to their textual
//! variants. A canonical name counts as present when any one variant occurs
//! as a case-insensitive substring of the source text; match count is
//! irrelevant.

use std::collections::BTreeSet;

/// Built-in technical skill variants.
const TECH_KEYWORDS: &[(&str, &[&str])] = &[
    ("python", &["python", "py"]),
    ("javascript", &["javascript", "js", "ecmascript"]),
    ("typescript", &["typescript", "ts"]),
    ("react", &["react", "reactjs", "react.js"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("angular", &["angular", "angularjs"]),
    ("node.js", &["node.js", "nodejs", "node"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("express", &["express", "expressjs", "express.js"]),
    ("fastapi", &["fastapi"]),
    ("spring", &["spring", "spring boot", "springboot"]),
    ("mysql", &["mysql"]),
    ("postgresql", &["postgresql", "postgres", "psql"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("redis", &["redis"]),
    ("sqlite", &["sqlite"]),
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud"]),
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("git", &["git", "github", "gitlab"]),
    ("ci/cd", &["ci/cd", "cicd", "jenkins", "github actions"]),
    ("agile", &["agile"]),
    ("scrum", &["scrum"]),
    ("rest", &["rest", "restful", "rest api"]),
    ("graphql", &["graphql"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3"]),
];

/// Built-in education level/field variants.
const EDUCATION_KEYWORDS: &[(&str, &[&str])] = &[
    ("bachelor", &["bachelor", "bachelor's", "bs", "b.s.", "ba", "b.a."]),
    ("master", &["master", "master's", "ms", "m.s.", "ma", "m.a.", "mba"]),
    ("phd", &["phd", "ph.d.", "doctorate"]),
    (
        "computer science",
        &["computer science", "cs", "computer engineering"],
    ),
    ("software engineering", &["software engineering"]),
    ("information technology", &["information technology", "it"]),
];

/// Built-in soft skill variants.
const SOFT_SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("communication", &["communication", "communicate"]),
    (
        "problem-solving",
        &["problem-solving", "problem solving", "analytical"],
    ),
    ("leadership", &["leadership", "lead", "led", "mentor", "mentoring"]),
    ("teamwork", &["teamwork", "team", "collaborate", "collaboration"]),
    ("adaptability", &["adaptable", "adaptability", "flexible"]),
];

/// One immutable canonical-name → variants mapping.
///
/// Variants are stored lower-cased; `found_in` expects pre-lowered text so a
/// single `to_lowercase` pass covers all three taxonomies.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<(String, Vec<String>)>,
}

impl Taxonomy {
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(canonical, variants)| {
                    (
                        canonical.to_lowercase(),
                        variants.iter().map(|v| v.to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Adds a custom entry at construction time. The canonical name itself
    /// always counts as a variant.
    pub fn with_entry(mut self, canonical: &str, variants: &[&str]) -> Self {
        let canonical = canonical.to_lowercase();
        let mut all: Vec<String> = vec![canonical.clone()];
        all.extend(variants.iter().map(|v| v.to_lowercase()));
        all.dedup();
        self.entries.push((canonical, all));
        self
    }

    /// Canonical names whose variants occur in `lowered_text`.
    ///
    /// Presence-only: the first matching variant marks the entry and the
    /// remaining variants are skipped.
    pub fn found_in(&self, lowered_text: &str) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|(_, variants)| variants.iter().any(|v| lowered_text.contains(v.as_str())))
            .map(|(canonical, _)| canonical.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three independent taxonomies the parser consults.
///
/// Constructed once (typically via `Default`) and shared read-only across
/// concurrent analyses.
#[derive(Debug, Clone)]
pub struct TaxonomySet {
    pub technical: Taxonomy,
    pub education: Taxonomy,
    pub soft_skills: Taxonomy,
}

impl Default for TaxonomySet {
    fn default() -> Self {
        Self {
            technical: Taxonomy::new(TECH_KEYWORDS.iter().copied()),
            education: Taxonomy::new(EDUCATION_KEYWORDS.iter().copied()),
            soft_skills: Taxonomy::new(SOFT_SKILL_KEYWORDS.iter().copied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_marks_canonical_name() {
        let set = TaxonomySet::default();
        let found = set.technical.found_in("shipped services in nodejs and postgres");
        assert!(found.contains("node.js"));
        assert!(found.contains("postgresql"));
    }

    #[test]
    fn test_presence_is_count_insensitive() {
        let set = TaxonomySet::default();
        let once = set.technical.found_in("django");
        let many = set.technical.found_in("django django django");
        assert_eq!(once, many);
    }

    #[test]
    fn test_absent_skill_not_reported() {
        let set = TaxonomySet::default();
        let found = set.technical.found_in("ten years of carpentry");
        assert!(!found.contains("django"));
        assert!(!found.contains("kubernetes"));
    }

    #[test]
    fn test_substring_match_is_intentional() {
        // "k8s" inside a longer token still counts — lookup is substring
        // presence, not word-boundary matching.
        let set = TaxonomySet::default();
        let found = set.technical.found_in("we run everything on k8s clusters");
        assert!(found.contains("kubernetes"));
    }

    #[test]
    fn test_custom_entry_extends_taxonomy() {
        let tech = Taxonomy::new(TECH_KEYWORDS.iter().copied()).with_entry("rust", &["rustlang"]);
        let found = tech.found_in("three years of rustlang");
        assert!(found.contains("rust"));
    }

    #[test]
    fn test_education_variants() {
        let set = TaxonomySet::default();
        let found = set.education.found_in("bachelor's degree in computer science");
        assert!(found.contains("bachelor"));
        assert!(found.contains("computer science"));
    }
}
