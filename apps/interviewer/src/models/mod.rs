pub mod candidate;

pub use candidate::{CandidateProfile, CandidateRecord};
