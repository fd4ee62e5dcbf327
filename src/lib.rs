pub mod config;
pub mod domain;
pub mod services;

pub use domain::answers::AssessmentAnswers;
pub use domain::pattern::MenstrualPattern;
pub use services::classifier::{classify, ClassificationResult};
