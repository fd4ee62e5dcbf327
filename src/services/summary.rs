use crate::domain::answers::{
    AgeRange, AssessmentAnswers, CycleLength, FlowHeaviness, PainLevel, PeriodDuration, Symptoms,
};
use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const UNKNOWN: &str = "Unknown";
pub const NONE_REPORTED: &str = "None reported";

/// One line of the cycle summary: display text plus the width of the
/// intensity bar next to it (0-100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryField {
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub age: SummaryField,
    pub cycle_length: SummaryField,
    pub period_duration: SummaryField,
    pub flow_heaviness: SummaryField,
    pub pain_level: SummaryField,
    pub symptoms: Vec<String>,
}

pub fn build_summary(answers: &AssessmentAnswers) -> CycleSummary {
    CycleSummary {
        age: SummaryField {
            text: age_category(answers.age).to_string(),
            level: age_level(answers.age),
        },
        cycle_length: SummaryField {
            text: cycle_length_text(answers.cycle_length).to_string(),
            level: cycle_length_level(answers.cycle_length),
        },
        period_duration: SummaryField {
            text: period_duration_text(answers.period_duration).to_string(),
            level: period_duration_level(answers.period_duration),
        },
        flow_heaviness: SummaryField {
            text: flow_text(answers.flow_heaviness).to_string(),
            level: flow_level(answers.flow_heaviness),
        },
        pain_level: SummaryField {
            text: pain_text(answers.pain_level).to_string(),
            level: pain_level(answers.pain_level),
        },
        symptoms: symptom_list(&answers.symptoms),
    }
}

pub fn age_category(age: Option<AgeRange>) -> &'static str {
    match age {
        None => NOT_SPECIFIED,
        Some(AgeRange::Under12) => "Pre-teen (under 13 years)",
        Some(AgeRange::From12To14) => "Early adolescent (12-14 years)",
        Some(AgeRange::From13To17) => "Adolescent (13-17 years)",
        Some(AgeRange::From15To17) => "Late adolescent (15-17 years)",
        Some(AgeRange::From18To24) => "Young adult (18-24 years)",
        Some(AgeRange::From25To34) => "Adult (25-34 years)",
        Some(AgeRange::From35To44) => "Adult (35-44 years)",
        Some(AgeRange::From25Plus) => "Adult (25+ years)",
        Some(AgeRange::Over44) => "Adult (45+ years)",
        Some(AgeRange::Unknown) => UNKNOWN,
    }
}

pub fn cycle_length_text(cycle: Option<CycleLength>) -> &'static str {
    match cycle {
        None => NOT_SPECIFIED,
        Some(CycleLength::LessThan21) => "Less than 21 days (shorter than typical)",
        Some(CycleLength::Days21To25) => "21-25 days (shorter than average)",
        Some(CycleLength::Days26To30) => "26-30 days (average length)",
        Some(CycleLength::Days31To35) => "31-35 days (longer than average)",
        Some(CycleLength::Days36To40) => "36-40 days (extended cycle)",
        Some(CycleLength::MoreThan40) => "More than 40 days (longer than typical)",
        Some(CycleLength::Irregular) => "Irregular (varies by more than 7 days)",
        Some(CycleLength::NotSure) => "Not sure",
        Some(CycleLength::Unknown) => UNKNOWN,
    }
}

pub fn period_duration_text(duration: Option<PeriodDuration>) -> &'static str {
    match duration {
        None => NOT_SPECIFIED,
        Some(PeriodDuration::Days1To3) => "1-3 days (shorter duration)",
        Some(PeriodDuration::Days4To5) => "4-5 days (average duration)",
        Some(PeriodDuration::Days6To7) => "6-7 days (longer duration)",
        Some(PeriodDuration::EightPlus) => "8+ days (extended duration)",
        Some(PeriodDuration::Varies) => "Varies from cycle to cycle",
        Some(PeriodDuration::NotSure) => "Not sure",
        Some(PeriodDuration::Unknown) => UNKNOWN,
    }
}

pub fn flow_text(flow: Option<FlowHeaviness>) -> &'static str {
    match flow {
        None => NOT_SPECIFIED,
        Some(FlowHeaviness::Light) => "Light - minimal bleeding",
        Some(FlowHeaviness::Moderate) => "Moderate - requires normal protection",
        Some(FlowHeaviness::Heavy) => "Heavy - requires frequent changes",
        Some(FlowHeaviness::VeryHeavy) => "Very heavy - may soak through protection",
        Some(FlowHeaviness::Varies) => "Varies throughout the period",
        Some(FlowHeaviness::NotSure) => "Not sure",
        Some(FlowHeaviness::Unknown) => UNKNOWN,
    }
}

pub fn pain_text(pain: Option<PainLevel>) -> &'static str {
    match pain {
        None => NOT_SPECIFIED,
        Some(PainLevel::NoPain) => "No pain",
        Some(PainLevel::Mild) => "Mild - does not interfere with daily activities",
        Some(PainLevel::Moderate) => "Moderate - may require pain relief",
        Some(PainLevel::Severe) => "Severe - limits normal activities",
        Some(PainLevel::Debilitating) => "Debilitating - prevents normal activities",
        Some(PainLevel::Varies) => "Varies during the period or between cycles",
        Some(PainLevel::Unknown) => UNKNOWN,
    }
}

/// Physical symptoms first, then emotional.
pub fn symptom_list(symptoms: &Symptoms) -> Vec<String> {
    if symptoms.is_empty() {
        return vec![NONE_REPORTED.to_string()];
    }
    symptoms
        .physical
        .iter()
        .chain(symptoms.emotional.iter())
        .cloned()
        .collect()
}

// Bar widths: 0 when unanswered, 50 when the answer carries no magnitude.

fn age_level(age: Option<AgeRange>) -> u8 {
    match age {
        None => 0,
        Some(AgeRange::Under12) => 15,
        Some(AgeRange::From12To14) => 20,
        Some(AgeRange::From13To17) => 25,
        Some(AgeRange::From15To17) => 30,
        Some(AgeRange::From18To24) => 35,
        Some(AgeRange::From25To34) | Some(AgeRange::From25Plus) => 45,
        Some(AgeRange::From35To44) => 65,
        Some(AgeRange::Over44) => 85,
        Some(AgeRange::Unknown) => 50,
    }
}

fn cycle_length_level(cycle: Option<CycleLength>) -> u8 {
    match cycle {
        None => 0,
        Some(CycleLength::LessThan21) => 20,
        Some(CycleLength::Days21To25) => 30,
        Some(CycleLength::Days26To30) => 45,
        Some(CycleLength::Days31To35) => 60,
        Some(CycleLength::Days36To40) => 75,
        Some(CycleLength::MoreThan40) => 100,
        Some(CycleLength::Irregular | CycleLength::NotSure | CycleLength::Unknown) => 50,
    }
}

fn period_duration_level(duration: Option<PeriodDuration>) -> u8 {
    match duration {
        None => 0,
        Some(PeriodDuration::Days1To3) => 20,
        Some(PeriodDuration::Days4To5) => 40,
        Some(PeriodDuration::Days6To7) => 60,
        Some(PeriodDuration::EightPlus) => 100,
        Some(PeriodDuration::Varies | PeriodDuration::NotSure | PeriodDuration::Unknown) => 50,
    }
}

fn flow_level(flow: Option<FlowHeaviness>) -> u8 {
    match flow {
        None => 0,
        Some(FlowHeaviness::Light) => 25,
        Some(FlowHeaviness::Moderate) => 50,
        Some(FlowHeaviness::Heavy) => 75,
        Some(FlowHeaviness::VeryHeavy) => 100,
        Some(FlowHeaviness::Varies | FlowHeaviness::NotSure | FlowHeaviness::Unknown) => 50,
    }
}

fn pain_level(pain: Option<PainLevel>) -> u8 {
    match pain {
        None | Some(PainLevel::NoPain) => 0,
        Some(PainLevel::Mild) => 25,
        Some(PainLevel::Moderate) => 50,
        Some(PainLevel::Severe) => 75,
        Some(PainLevel::Debilitating) => 100,
        Some(PainLevel::Varies | PainLevel::Unknown) => 50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_read_not_specified() {
        let summary = build_summary(&AssessmentAnswers::default());

        assert_eq!(summary.age.text, NOT_SPECIFIED);
        assert_eq!(summary.cycle_length.text, NOT_SPECIFIED);
        assert_eq!(summary.pain_level.text, NOT_SPECIFIED);
        assert_eq!(summary.age.level, 0);
        assert_eq!(summary.symptoms, vec![NONE_REPORTED.to_string()]);
    }

    #[test]
    fn test_unknown_values_read_unknown() {
        let answers = AssessmentAnswers {
            age: Some(AgeRange::from("ancient")),
            cycle_length: Some(CycleLength::from("garbage")),
            period_duration: Some(PeriodDuration::from("forever")),
            flow_heaviness: Some(FlowHeaviness::from("torrential")),
            pain_level: Some(PainLevel::from("extreme")),
            ..Default::default()
        };
        let summary = build_summary(&answers);

        assert_eq!(summary.age.text, UNKNOWN);
        assert_eq!(summary.cycle_length.text, UNKNOWN);
        assert_eq!(summary.period_duration.text, UNKNOWN);
        assert_eq!(summary.flow_heaviness.text, UNKNOWN);
        assert_eq!(summary.pain_level.text, UNKNOWN);
        assert_eq!(summary.cycle_length.level, 50);
    }

    #[test]
    fn test_lookup_tables() {
        assert_eq!(age_category(Some(AgeRange::From12To14)), "Early adolescent (12-14 years)");
        assert_eq!(cycle_length_text(Some(CycleLength::Days26To30)), "26-30 days (average length)");
        assert_eq!(period_duration_text(Some(PeriodDuration::EightPlus)), "8+ days (extended duration)");
        assert_eq!(pain_text(Some(PainLevel::Severe)), "Severe - limits normal activities");
        assert_eq!(flow_text(Some(FlowHeaviness::VeryHeavy)), "Very heavy - may soak through protection");
    }

    #[test]
    fn test_symptom_list_physical_then_emotional() {
        let symptoms = Symptoms::new(["Headaches", "Bloating"], ["Mood swings"]);
        assert_eq!(
            symptom_list(&symptoms),
            vec!["Bloating", "Headaches", "Mood swings"]
        );
    }

    #[test]
    fn test_levels_follow_magnitude() {
        assert!(flow_level(Some(FlowHeaviness::Light)) < flow_level(Some(FlowHeaviness::Heavy)));
        assert!(pain_level(Some(PainLevel::Mild)) < pain_level(Some(PainLevel::Debilitating)));
        assert_eq!(period_duration_level(Some(PeriodDuration::EightPlus)), 100);
        assert_eq!(pain_level(Some(PainLevel::NoPain)), 0);
    }
}
