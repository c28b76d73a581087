pub mod course;
pub mod enrollment;
pub mod profile;
pub mod weights;

pub use course::{Course, CourseDocument};
pub use enrollment::Enrollment;
pub use profile::{ScoredCandidate, Signal, SignalContribution, StudentProfile};
pub use weights::ScoringWeights;
