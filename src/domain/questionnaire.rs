//! Multi-step questionnaire state.
//!
//! The pages fill one step at a time; the session is finished exactly once
//! and handed to the classifier as [`AssessmentAnswers`].

use crate::domain::answers::{
    AgeRange, AssessmentAnswers, CycleLength, FlowHeaviness, PainLevel, PeriodDuration,
    SymptomKind, Symptoms,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("empty answer for {0} step")]
    EmptyAnswer(&'static str),
    #[error("symptoms are recorded with set_symptoms or toggle_symptom")]
    SymptomsNotScalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionnaireStep {
    Age,
    CycleLength,
    PeriodDuration,
    FlowHeaviness,
    PainLevel,
    Symptoms,
}

impl QuestionnaireStep {
    pub const ORDER: [QuestionnaireStep; 6] = [
        Self::Age,
        Self::CycleLength,
        Self::PeriodDuration,
        Self::FlowHeaviness,
        Self::PainLevel,
        Self::Symptoms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::CycleLength => "cycle_length",
            Self::PeriodDuration => "period_duration",
            Self::FlowHeaviness => "flow_heaviness",
            Self::PainLevel => "pain_level",
            Self::Symptoms => "symptoms",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            Self::Age => "How old are you?",
            Self::CycleLength => "How long is your menstrual cycle?",
            Self::PeriodDuration => "How many days does your period usually last?",
            Self::FlowHeaviness => "How would you describe your menstrual flow?",
            Self::PainLevel => "How would you rate your menstrual pain?",
            Self::Symptoms => "Do you experience any of these symptoms?",
        }
    }

    /// Progress shown once this step is answered.
    pub fn progress_percent(&self) -> u8 {
        match self {
            Self::Age => 17,
            Self::CycleLength => 33,
            Self::PeriodDuration => 50,
            Self::FlowHeaviness => 67,
            Self::PainLevel => 83,
            Self::Symptoms => 100,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionnaireSession {
    answers: AssessmentAnswers,
    symptoms_answered: bool,
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scalar step. Unrecognised values are kept as `Unknown`.
    pub fn answer(&mut self, step: QuestionnaireStep, raw: &str) -> Result<(), QuestionnaireError> {
        if raw.trim().is_empty() {
            return Err(QuestionnaireError::EmptyAnswer(step.as_str()));
        }
        match step {
            QuestionnaireStep::Age => self.answers.age = Some(AgeRange::from(raw)),
            QuestionnaireStep::CycleLength => {
                self.answers.cycle_length = Some(CycleLength::from(raw))
            }
            QuestionnaireStep::PeriodDuration => {
                self.answers.period_duration = Some(PeriodDuration::from(raw))
            }
            QuestionnaireStep::FlowHeaviness => {
                self.answers.flow_heaviness = Some(FlowHeaviness::from(raw))
            }
            QuestionnaireStep::PainLevel => self.answers.pain_level = Some(PainLevel::from(raw)),
            QuestionnaireStep::Symptoms => return Err(QuestionnaireError::SymptomsNotScalar),
        }
        Ok(())
    }

    pub fn set_symptoms<P, E>(&mut self, physical: P, emotional: E)
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        self.answers.symptoms = Symptoms::new(physical, emotional);
        self.symptoms_answered = true;
    }

    /// Checkbox behaviour: adds the symptom, or removes it if already selected.
    pub fn toggle_symptom(&mut self, kind: SymptomKind, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let set = self.answers.symptoms.set_for(kind);
        if !set.remove(name) {
            set.insert(name.to_string());
        }
        self.symptoms_answered = true;
    }

    pub fn is_answered(&self, step: QuestionnaireStep) -> bool {
        match step {
            QuestionnaireStep::Age => self.answers.age.is_some(),
            QuestionnaireStep::CycleLength => self.answers.cycle_length.is_some(),
            QuestionnaireStep::PeriodDuration => self.answers.period_duration.is_some(),
            QuestionnaireStep::FlowHeaviness => self.answers.flow_heaviness.is_some(),
            QuestionnaireStep::PainLevel => self.answers.pain_level.is_some(),
            QuestionnaireStep::Symptoms => self.symptoms_answered,
        }
    }

    /// First unanswered step in page order.
    pub fn next_step(&self) -> Option<QuestionnaireStep> {
        QuestionnaireStep::ORDER
            .into_iter()
            .find(|step| !self.is_answered(*step))
    }

    pub fn progress_percent(&self) -> u8 {
        let answered = QuestionnaireStep::ORDER
            .iter()
            .filter(|step| self.is_answered(**step))
            .count();
        ((answered * 100) / QuestionnaireStep::ORDER.len()) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.next_step().is_none()
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    /// Unanswered steps stay `None` and read as "Not specified" downstream.
    pub fn finish(self) -> AssessmentAnswers {
        self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_walks_steps_in_order() {
        let mut session = QuestionnaireSession::new();
        assert_eq!(session.next_step(), Some(QuestionnaireStep::Age));
        assert_eq!(session.progress_percent(), 0);

        session.answer(QuestionnaireStep::Age, "18-24").unwrap();
        session.answer(QuestionnaireStep::CycleLength, "26-30 days").unwrap();
        assert_eq!(session.next_step(), Some(QuestionnaireStep::PeriodDuration));
        assert_eq!(session.progress_percent(), 33);

        session.answer(QuestionnaireStep::PeriodDuration, "4-5").unwrap();
        session.answer(QuestionnaireStep::FlowHeaviness, "moderate").unwrap();
        session.answer(QuestionnaireStep::PainLevel, "mild").unwrap();
        session.set_symptoms(["Headaches"], Vec::<String>::new());

        assert!(session.is_complete());
        assert_eq!(session.progress_percent(), 100);

        let answers = session.finish();
        assert_eq!(answers.cycle_length, Some(CycleLength::Days26To30));
        assert!(answers.symptoms.physical.contains("Headaches"));
    }

    #[test]
    fn test_answer_rejects_blank_and_symptoms() {
        let mut session = QuestionnaireSession::new();
        assert_eq!(
            session.answer(QuestionnaireStep::Age, "   "),
            Err(QuestionnaireError::EmptyAnswer("age"))
        );
        assert_eq!(
            session.answer(QuestionnaireStep::Symptoms, "Bloating"),
            Err(QuestionnaireError::SymptomsNotScalar)
        );
        assert!(!session.is_answered(QuestionnaireStep::Age));
    }

    #[test]
    fn test_toggle_symptom() {
        let mut session = QuestionnaireSession::new();
        session.toggle_symptom(SymptomKind::Physical, "Bloating");
        session.toggle_symptom(SymptomKind::Emotional, "Anxiety");
        session.toggle_symptom(SymptomKind::Physical, "Bloating");

        assert!(session.is_answered(QuestionnaireStep::Symptoms));
        assert!(session.answers().symptoms.physical.is_empty());
        assert!(session.answers().symptoms.emotional.contains("Anxiety"));
    }

    #[test]
    fn test_unknown_answer_is_recorded() {
        let mut session = QuestionnaireSession::new();
        session.answer(QuestionnaireStep::CycleLength, "other").unwrap();
        assert!(session.is_answered(QuestionnaireStep::CycleLength));
        assert_eq!(session.finish().cycle_length, Some(CycleLength::Unknown));
    }

    #[test]
    fn test_step_progress_labels() {
        assert_eq!(QuestionnaireStep::CycleLength.progress_percent(), 33);
        assert_eq!(QuestionnaireStep::Symptoms.progress_percent(), 100);
        assert!(QuestionnaireStep::PainLevel.question().contains("pain"));
    }
}
