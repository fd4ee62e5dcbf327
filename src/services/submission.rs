//! Persistable assessment record.
//!
//! Storage belongs to the calling service; this only validates the answers
//! and shapes `{pattern, answers, recommendations}` the way the assessment
//! endpoint expects it.

use crate::domain::answers::{
    AgeRange, AssessmentAnswers, CycleLength, FlowHeaviness, PainLevel, PeriodDuration, Symptoms,
};
use crate::domain::pattern::MenstrualPattern;
use crate::services::classifier::ClassificationResult;
use crate::services::recommendations::Recommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("invalid assessment: {}", .0.join(", "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    pub date: DateTime<Utc>,
    pub pattern: MenstrualPattern,
    pub age: AgeRange,
    pub cycle_length: CycleLength,
    pub period_duration: String,
    pub flow_heaviness: Option<FlowHeaviness>,
    pub pain_level: String,
    pub symptoms: Symptoms,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub assessment_data: AssessmentData,
}

/// Messages for every rule the answers break; empty when they are valid.
/// Age and cycle length are required, the rest only have to be recognised.
pub fn validate_answers(answers: &AssessmentAnswers) -> Vec<String> {
    let mut errors = Vec::new();

    match answers.age {
        None => errors.push("age is required".to_string()),
        Some(AgeRange::Unknown) => errors.push("Invalid age value".to_string()),
        Some(_) => {}
    }

    match answers.cycle_length {
        None => errors.push("cycleLength is required".to_string()),
        Some(CycleLength::Unknown) => errors.push("Invalid cycleLength value".to_string()),
        Some(_) => {}
    }

    if answers.period_duration == Some(PeriodDuration::Unknown) {
        errors.push("Invalid periodDuration value".to_string());
    }
    if answers.flow_heaviness == Some(FlowHeaviness::Unknown) {
        errors.push("Invalid flowHeaviness value".to_string());
    }
    if answers.pain_level == Some(PainLevel::Unknown) {
        errors.push("Invalid painLevel value".to_string());
    }

    errors
}

pub fn build_record(
    user_id: Uuid,
    answers: &AssessmentAnswers,
    result: &ClassificationResult,
    now: DateTime<Utc>,
) -> Result<AssessmentRecord, SubmissionError> {
    let mut errors = Vec::new();
    if user_id.is_nil() {
        errors.push("userId is required".to_string());
    }
    errors.extend(validate_answers(answers));

    // validate_answers guarantees both are present once errors is empty
    let (Some(age), Some(cycle_length), true) =
        (answers.age, answers.cycle_length, errors.is_empty())
    else {
        tracing::warn!(user_id = %user_id, errors = ?errors, "Rejected assessment submission");
        return Err(SubmissionError::Invalid(errors));
    };

    let record = AssessmentRecord {
        id: Uuid::new_v4(),
        user_id,
        created_at: now,
        assessment_data: AssessmentData {
            date: now,
            pattern: result.pattern,
            age,
            cycle_length,
            period_duration: answers
                .period_duration
                .map(|d| d.as_str().to_string())
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            flow_heaviness: answers.flow_heaviness,
            pain_level: answers
                .pain_level
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
            symptoms: answers.symptoms.clone(),
            recommendations: result.recommendations.clone(),
        },
    };

    Ok(record)
}
