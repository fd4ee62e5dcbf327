use crate::domain::answers::AssessmentAnswers;
use crate::domain::pattern::MenstrualPattern;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

impl Recommendation {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

pub const TRACK_YOUR_CYCLE: &str = "Track Your Cycle";
pub const BE_PATIENT: &str = "Be Patient With Your Cycle";
pub const PAIN_MANAGEMENT: &str = "Pain Management";
pub const CONSULT_PROVIDER: &str = "Consult a Healthcare Provider";

/// Builds the ordered guidance list: universal first, then pattern, age,
/// pain and symptom specific items, then the general wellness pair.
/// Never empty.
pub fn build_recommendations(
    pattern: MenstrualPattern,
    answers: &AssessmentAnswers,
) -> Vec<Recommendation> {
    let mut candidates = vec![Recommendation::new(
        TRACK_YOUR_CYCLE,
        "Keep a record of when your period starts and stops to identify patterns.",
    )];

    add_pattern_items(&mut candidates, pattern);
    add_age_items(&mut candidates, answers);
    add_pain_items(&mut candidates, answers);
    add_symptom_items(&mut candidates, answers);
    add_wellness_items(&mut candidates);

    let mut selected: Vec<Recommendation> = Vec::with_capacity(candidates.len());
    for item in candidates {
        if selected
            .iter()
            .any(|r| r.title.eq_ignore_ascii_case(&item.title))
        {
            continue;
        }
        selected.push(item);
    }
    selected
}

fn add_pattern_items(c: &mut Vec<Recommendation>, pattern: MenstrualPattern) {
    match pattern {
        MenstrualPattern::Regular => {
            c.push(Recommendation::new(
                "Prioritize Sleep",
                "Aim for 8-10 hours of sleep, especially during your period when fatigue is common.",
            ));
        }
        MenstrualPattern::Irregular => {
            c.push(Recommendation::new(
                CONSULT_PROVIDER,
                "If your cycles are consistently irregular, consider discussing with a healthcare provider.",
            ));
            c.push(Recommendation::new(
                "Focus on Nutrition",
                "A balanced diet can help support hormonal balance and regulate cycles.",
            ));
            c.push(Recommendation::new(
                "Stress Management",
                "High stress can affect your cycle. Consider yoga, meditation, or other relaxation techniques.",
            ));
        }
        MenstrualPattern::Heavy => {
            c.push(Recommendation::new(
                "Iron-rich Foods",
                "Include lean red meat, spinach, beans, and fortified cereals to prevent iron deficiency.",
            ));
            c.push(Recommendation::new(
                "Stay Hydrated",
                "Drink plenty of water to help replace fluids lost during your period.",
            ));
            c.push(Recommendation::new(
                "Medical Evaluation",
                "If your flow regularly soaks through pads/tampons hourly, consult a healthcare provider.",
            ));
            c.push(Recommendation::new(
                "Plan Ahead",
                "Keep extra supplies and a change of clothes available during heavy flow days.",
            ));
        }
        MenstrualPattern::Pain => {
            c.push(Recommendation::new(
                "Heat Therapy",
                "Apply a heating pad to your lower abdomen to help relieve menstrual cramps.",
            ));
            c.push(Recommendation::new(
                "Gentle Exercise",
                "Light activities like walking or stretching can help alleviate menstrual pain.",
            ));
        }
        MenstrualPattern::Developing => {
            c.push(Recommendation::new(
                "Learn About Your Body",
                "Understanding menstrual health can help you recognize what's normal for you.",
            ));
            c.push(Recommendation::new(
                "Talk to Someone You Trust",
                "Discuss concerns with a parent, school nurse, or healthcare provider.",
            ));
        }
    }
}

fn add_age_items(c: &mut Vec<Recommendation>, answers: &AssessmentAnswers) {
    if answers.is_adolescent() {
        c.push(Recommendation::new(
            BE_PATIENT,
            "It's normal for your cycle to be irregular during adolescence. It can take 2-3 years to establish a regular pattern.",
        ));
    }
}

fn add_pain_items(c: &mut Vec<Recommendation>, answers: &AssessmentAnswers) {
    let Some(pain) = answers.pain_level else {
        return;
    };
    if pain.is_moderate_or_worse() {
        c.push(Recommendation::new(
            PAIN_MANAGEMENT,
            "Over-the-counter pain relievers like ibuprofen and a heating pad can help with cramps.",
        ));
    }
    if pain.is_severe() {
        c.push(Recommendation::new(
            CONSULT_PROVIDER,
            "Pain that limits your daily activities is worth discussing with a healthcare provider.",
        ));
    }
}

fn add_symptom_items(c: &mut Vec<Recommendation>, answers: &AssessmentAnswers) {
    if answers.symptoms.has_physical("Fatigue") {
        c.push(Recommendation::new(
            "Rest and Sleep",
            "Ensure you get adequate rest and maintain a regular sleep schedule.",
        ));
    }
    if !answers.symptoms.emotional.is_empty() {
        c.push(Recommendation::new(
            "Emotional Support",
            "Consider talking to a counselor or joining a support group about emotional symptoms.",
        ));
    }
}

fn add_wellness_items(c: &mut Vec<Recommendation>) {
    c.push(Recommendation::new(
        "Exercise Regularly",
        "Light to moderate exercise can help reduce menstrual pain and improve mood.",
    ));
    c.push(Recommendation::new(
        "Maintain a Balanced Diet",
        "Foods rich in iron, calcium, and omega-3 fatty acids can help manage period symptoms.",
    ));
}
