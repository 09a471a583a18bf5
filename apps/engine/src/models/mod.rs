// Record types exchanged with the surrounding job-board system. The engine
// reads these; creating, persisting, and authorizing them is the host's job.

pub mod application;
pub mod job;
pub mod upload;

pub use application::{AnalysisRecord, Applicant, ApplicationStatus, JobApplication};
pub use job::Job;
pub use upload::UploadedResume;
