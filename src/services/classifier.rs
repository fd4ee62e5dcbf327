//! Rule-based menstrual pattern classification.
//!
//! Rules are evaluated in [`RULES`] order and the first match wins, so the
//! order itself encodes clinical priority: timing irregularity and heavy
//! bleeding are flagged before pain, pain before a regular cycle. Anything
//! left over is [`MenstrualPattern::Developing`].

use crate::domain::answers::AssessmentAnswers;
use crate::domain::pattern::MenstrualPattern;
use crate::services::recommendations::{build_recommendations, Recommendation};
use crate::services::summary::{build_summary, CycleSummary};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PATTERN: MenstrualPattern = MenstrualPattern::Developing;

pub struct PatternRule {
    pub name: &'static str,
    pub pattern: MenstrualPattern,
    predicate: fn(&AssessmentAnswers) -> bool,
}

impl PatternRule {
    pub fn matches(&self, answers: &AssessmentAnswers) -> bool {
        (self.predicate)(answers)
    }
}

pub static RULES: [PatternRule; 4] = [
    PatternRule {
        name: "irregular_timing",
        pattern: MenstrualPattern::Irregular,
        predicate: irregular_timing,
    },
    PatternRule {
        name: "heavy_or_prolonged_flow",
        pattern: MenstrualPattern::Heavy,
        predicate: heavy_or_prolonged_flow,
    },
    PatternRule {
        name: "pain_predominant",
        pattern: MenstrualPattern::Pain,
        predicate: pain_predominant,
    },
    PatternRule {
        name: "regular_cycle",
        pattern: MenstrualPattern::Regular,
        predicate: regular_cycle,
    },
];

fn irregular_timing(a: &AssessmentAnswers) -> bool {
    a.cycle_length.is_some_and(|c| c.is_irregular_timing())
}

fn heavy_or_prolonged_flow(a: &AssessmentAnswers) -> bool {
    a.period_duration.is_some_and(|d| d.is_prolonged()) || a.is_heavy_flow()
}

fn pain_predominant(a: &AssessmentAnswers) -> bool {
    a.is_severe_pain()
}

fn regular_cycle(a: &AssessmentAnswers) -> bool {
    a.cycle_length.is_some_and(|c| c.is_within_normal_band())
        && a.period_duration.is_some_and(|d| d.is_within_normal_band())
        && !a.is_heavy_flow()
        && !a.is_severe_pain()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub pattern: MenstrualPattern,
    pub title: String,
    pub description: String,
    pub cycle_summary: CycleSummary,
    pub recommendations: Vec<Recommendation>,
}

/// First rule that matches, or `None` when the default applies.
pub fn matching_rule(answers: &AssessmentAnswers) -> Option<&'static PatternRule> {
    RULES.iter().find(|rule| rule.matches(answers))
}

pub fn determine_pattern(answers: &AssessmentAnswers) -> MenstrualPattern {
    matching_rule(answers)
        .map(|rule| rule.pattern)
        .unwrap_or(DEFAULT_PATTERN)
}

/// Total over every answer set: missing and unrecognised values fall
/// through to the default pattern and "Unknown"/"Not specified" text.
pub fn classify(answers: &AssessmentAnswers) -> ClassificationResult {
    let pattern = determine_pattern(answers);
    ClassificationResult {
        pattern,
        title: pattern.title().to_string(),
        description: pattern.description().to_string(),
        cycle_summary: build_summary(answers),
        recommendations: build_recommendations(pattern, answers),
    }
}
