pub mod answers;
pub mod pattern;
pub mod questionnaire;
