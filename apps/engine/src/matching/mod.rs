// Matching core: keyword taxonomies, structured parsing, weighted scoring,
// and summary rendering. Everything here is pure and synchronous — no I/O,
// no shared mutable state. File handling lives in `crate::extract`.

pub mod parser;
pub mod scorer;
pub mod summary;
pub mod taxonomy;

// Re-export the public API consumed by the orchestrator and by callers
// inspecting analysis payloads.
pub use parser::{JobRequirement, JobRequirementSource, ResumeStructure, StructuredParser};
pub use scorer::{score_match, CategoryScores, CategorySets, ExperienceComparison, MatchResult};
pub use summary::summarize;
pub use taxonomy::{Taxonomy, TaxonomySet};
