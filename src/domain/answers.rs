use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Canonical form of a questionnaire token.
///
/// The questionnaire pages have stored both machine values (`21_25`) and
/// display text (`"21-25 days"`, `"More than 7 days"`), so every lookup goes
/// through this first.
pub fn normalize_token(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        let c = if c == '-' || c.is_whitespace() { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    let out = out.trim_matches('_');
    out.strip_suffix("_days")
        .or_else(|| out.strip_suffix("_years"))
        .unwrap_or(out)
        .to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "Value", into = "&'static str")]
pub enum AgeRange {
    Under12,
    From12To14,
    From13To17,
    From15To17,
    From18To24,
    From25To34,
    From35To44,
    From25Plus,
    Over44,
    Unknown,
}

impl AgeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under12 => "under_12",
            Self::From12To14 => "12_14",
            Self::From13To17 => "13_17",
            Self::From15To17 => "15_17",
            Self::From18To24 => "18_24",
            Self::From25To34 => "25_34",
            Self::From35To44 => "35_44",
            Self::From25Plus => "25_plus",
            Self::Over44 => "over_44",
            Self::Unknown => "unknown",
        }
    }

    /// Buckets where cycles are still establishing themselves.
    pub fn is_adolescent(&self) -> bool {
        matches!(
            self,
            Self::Under12 | Self::From12To14 | Self::From13To17 | Self::From15To17
        )
    }
}

impl From<&str> for AgeRange {
    fn from(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "under_12" | "under_13" => Self::Under12,
            "12_14" => Self::From12To14,
            "13_17" => Self::From13To17,
            "15_17" => Self::From15To17,
            "18_24" => Self::From18To24,
            "25_34" => Self::From25To34,
            "35_44" => Self::From35To44,
            "25_plus" | "25+" | "over_24" => Self::From25Plus,
            "over_44" | "45_plus" | "45+" => Self::Over44,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "Value", into = "&'static str")]
pub enum CycleLength {
    LessThan21,
    Days21To25,
    Days26To30,
    Days31To35,
    Days36To40,
    MoreThan40,
    Irregular,
    NotSure,
    Unknown,
}

impl CycleLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LessThan21 => "less_than_21",
            Self::Days21To25 => "21_25",
            Self::Days26To30 => "26_30",
            Self::Days31To35 => "31_35",
            Self::Days36To40 => "36_40",
            Self::MoreThan40 => "more_than_40",
            Self::Irregular => "irregular",
            Self::NotSure => "not_sure",
            Self::Unknown => "unknown",
        }
    }

    /// 21 to 40 days between periods.
    pub fn is_within_normal_band(&self) -> bool {
        matches!(
            self,
            Self::Days21To25 | Self::Days26To30 | Self::Days31To35 | Self::Days36To40
        )
    }

    pub fn is_irregular_timing(&self) -> bool {
        matches!(self, Self::Irregular | Self::LessThan21 | Self::MoreThan40)
    }
}

impl From<&str> for CycleLength {
    fn from(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "less_than_21" | "under_21" => Self::LessThan21,
            "21_25" => Self::Days21To25,
            "26_30" => Self::Days26To30,
            "31_35" => Self::Days31To35,
            "36_40" => Self::Days36To40,
            "more_than_40" | "more_than_45" | "45_plus" | "45+" | "over_40" => Self::MoreThan40,
            "irregular" => Self::Irregular,
            "not_sure" | "i'm_not_sure" | "im_not_sure" | "unsure" => Self::NotSure,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "Value", into = "&'static str")]
pub enum PeriodDuration {
    Days1To3,
    Days4To5,
    Days6To7,
    EightPlus,
    Varies,
    NotSure,
    Unknown,
}

impl PeriodDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days1To3 => "1_3",
            Self::Days4To5 => "4_5",
            Self::Days6To7 => "6_7",
            Self::EightPlus => "8_plus",
            Self::Varies => "varies",
            Self::NotSure => "not_sure",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_within_normal_band(&self) -> bool {
        matches!(self, Self::Days1To3 | Self::Days4To5 | Self::Days6To7)
    }

    pub fn is_prolonged(&self) -> bool {
        matches!(self, Self::EightPlus)
    }
}

impl From<&str> for PeriodDuration {
    fn from(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "1_3" => Self::Days1To3,
            "4_5" => Self::Days4To5,
            "6_7" => Self::Days6To7,
            "8_plus" | "8plus" | "8+" | "more_than_7" => Self::EightPlus,
            "varies" | "it_varies" => Self::Varies,
            "not_sure" | "i'm_not_sure" | "im_not_sure" | "unsure" => Self::NotSure,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "Value", into = "&'static str")]
pub enum FlowHeaviness {
    Light,
    Moderate,
    Heavy,
    VeryHeavy,
    Varies,
    NotSure,
    Unknown,
}

impl FlowHeaviness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::VeryHeavy => "very_heavy",
            Self::Varies => "varies",
            Self::NotSure => "not_sure",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_heavy(&self) -> bool {
        matches!(self, Self::Heavy | Self::VeryHeavy)
    }
}

impl From<&str> for FlowHeaviness {
    fn from(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "heavy" => Self::Heavy,
            "very_heavy" | "veryheavy" => Self::VeryHeavy,
            "varies" | "it_varies" => Self::Varies,
            "not_sure" | "i'm_not_sure" | "im_not_sure" | "unsure" => Self::NotSure,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "Value", into = "&'static str")]
pub enum PainLevel {
    NoPain,
    Mild,
    Moderate,
    Severe,
    Debilitating,
    Varies,
    Unknown,
}

impl PainLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPain => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Debilitating => "debilitating",
            Self::Varies => "varies",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_severe(&self) -> bool {
        matches!(self, Self::Severe | Self::Debilitating)
    }

    pub fn is_moderate_or_worse(&self) -> bool {
        matches!(self, Self::Moderate | Self::Severe | Self::Debilitating)
    }
}

impl From<&str> for PainLevel {
    fn from(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "none" | "no_pain" | "no" => Self::NoPain,
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "severe" => Self::Severe,
            "debilitating" => Self::Debilitating,
            "varies" | "it_varies" => Self::Varies,
            _ => Self::Unknown,
        }
    }
}

// Buckets deserialize from any JSON value; non-strings read as Unknown.
macro_rules! impl_value_conversions {
    ($($bucket:ty),+ $(,)?) => {
        $(
            impl From<Value> for $bucket {
                fn from(value: Value) -> Self {
                    match value {
                        Value::String(raw) => Self::from(raw.as_str()),
                        _ => Self::Unknown,
                    }
                }
            }

            impl From<$bucket> for &'static str {
                fn from(value: $bucket) -> Self {
                    value.as_str()
                }
            }
        )+
    };
}

impl_value_conversions!(AgeRange, CycleLength, PeriodDuration, FlowHeaviness, PainLevel);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomKind {
    Physical,
    Emotional,
}

/// Accepts the grouped `{physical, emotional}` object or the flat list the
/// results page keeps, which is read as physical symptoms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct Symptoms {
    pub physical: BTreeSet<String>,
    pub emotional: BTreeSet<String>,
}

impl Symptoms {
    pub fn new<P, E>(physical: P, emotional: E) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            physical: clean_symptoms(physical),
            emotional: clean_symptoms(emotional),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.physical.is_empty() && self.emotional.is_empty()
    }

    pub fn set_for(&mut self, kind: SymptomKind) -> &mut BTreeSet<String> {
        match kind {
            SymptomKind::Physical => &mut self.physical,
            SymptomKind::Emotional => &mut self.emotional,
        }
    }

    pub fn has_physical(&self, name: &str) -> bool {
        self.physical.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

fn clean_symptoms<I>(items: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn symptom_values(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        Some(Value::Array(items)) => clean_symptoms(items.iter().filter_map(Value::as_str)),
        Some(Value::String(single)) => clean_symptoms([single]),
        _ => BTreeSet::new(),
    }
}

impl From<Value> for Symptoms {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                physical: symptom_values(map.get("physical")),
                emotional: symptom_values(map.get("emotional")),
            },
            flat @ (Value::Array(_) | Value::String(_)) => Self {
                physical: symptom_values(Some(&flat)),
                emotional: BTreeSet::new(),
            },
            _ => Self::default(),
        }
    }
}

/// Completed questionnaire state, read-only for the classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnswers {
    #[serde(default)]
    pub age: Option<AgeRange>,
    #[serde(default)]
    pub cycle_length: Option<CycleLength>,
    #[serde(default)]
    pub period_duration: Option<PeriodDuration>,
    #[serde(default, alias = "flowLevel")]
    pub flow_heaviness: Option<FlowHeaviness>,
    #[serde(default)]
    pub pain_level: Option<PainLevel>,
    #[serde(default)]
    pub symptoms: Symptoms,
}

impl AssessmentAnswers {
    pub fn is_heavy_flow(&self) -> bool {
        self.flow_heaviness.is_some_and(|f| f.is_heavy())
    }

    pub fn is_severe_pain(&self) -> bool {
        self.pain_level.is_some_and(|p| p.is_severe())
    }

    pub fn is_adolescent(&self) -> bool {
        self.age.is_some_and(|a| a.is_adolescent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("21-25 days"), "21_25");
        assert_eq!(normalize_token("  More than 7 days "), "more_than_7");
        assert_eq!(normalize_token("8-plus"), "8_plus");
        assert_eq!(normalize_token("13-17 years"), "13_17");
        assert_eq!(normalize_token("I'm not sure"), "i'm_not_sure");
        assert_eq!(normalize_token("very - heavy"), "very_heavy");
        assert_eq!(normalize_token(""), "");
    }

    #[test]
    fn test_lenient_bucket_parsing() {
        assert_eq!(CycleLength::from("26-30 days"), CycleLength::Days26To30);
        assert_eq!(CycleLength::from("Irregular"), CycleLength::Irregular);
        assert_eq!(CycleLength::from("More than 45 days"), CycleLength::MoreThan40);
        assert_eq!(PeriodDuration::from("More than 7 days"), PeriodDuration::EightPlus);
        assert_eq!(PeriodDuration::from("8+ days"), PeriodDuration::EightPlus);
        assert_eq!(PeriodDuration::from("It varies"), PeriodDuration::Varies);
        assert_eq!(FlowHeaviness::from("very-heavy"), FlowHeaviness::VeryHeavy);
        assert_eq!(PainLevel::from("no-pain"), PainLevel::NoPain);
        assert_eq!(AgeRange::from("25-plus"), AgeRange::From25Plus);
        assert_eq!(AgeRange::from("under-13"), AgeRange::Under12);
    }

    #[test]
    fn test_unrecognised_values_become_unknown() {
        assert_eq!(CycleLength::from("garbage"), CycleLength::Unknown);
        assert_eq!(AgeRange::from(""), AgeRange::Unknown);
        assert_eq!(PainLevel::from("extreme"), PainLevel::Unknown);
    }

    #[test]
    fn test_adolescent_buckets() {
        assert!(AgeRange::From12To14.is_adolescent());
        assert!(AgeRange::From13To17.is_adolescent());
        assert!(AgeRange::From15To17.is_adolescent());
        assert!(!AgeRange::From18To24.is_adolescent());
        assert!(!AgeRange::Over44.is_adolescent());
        assert!(!AgeRange::Unknown.is_adolescent());
    }

    #[test]
    fn test_deserialize_answers() {
        let json = r#"{
            "age": "18_24",
            "cycleLength": "garbage",
            "periodDuration": "4-5 days",
            "flowLevel": "Heavy",
            "symptoms": { "physical": ["Headaches", " ", "Bloating", "Headaches"] }
        }"#;
        let answers: AssessmentAnswers = serde_json::from_str(json).unwrap();

        assert_eq!(answers.age, Some(AgeRange::From18To24));
        assert_eq!(answers.cycle_length, Some(CycleLength::Unknown));
        assert_eq!(answers.period_duration, Some(PeriodDuration::Days4To5));
        assert_eq!(answers.flow_heaviness, Some(FlowHeaviness::Heavy));
        assert_eq!(answers.pain_level, None);
        assert_eq!(answers.symptoms.physical.len(), 2);
        assert!(answers.symptoms.emotional.is_empty());
    }

    #[test]
    fn test_serialize_canonical_tokens() {
        let answers = AssessmentAnswers {
            age: Some(AgeRange::From12To14),
            period_duration: Some(PeriodDuration::EightPlus),
            ..Default::default()
        };
        let value = serde_json::to_value(&answers).unwrap();

        assert_eq!(value["age"], "12_14");
        assert_eq!(value["periodDuration"], "8_plus");
        assert!(value["cycleLength"].is_null());
    }

    #[test]
    fn test_symptoms_ignore_case_lookup() {
        let symptoms = Symptoms::new(["fatigue"], Vec::<String>::new());
        assert!(symptoms.has_physical("Fatigue"));
        assert!(!symptoms.is_empty());
        assert!(Symptoms::default().is_empty());
    }

    #[test]
    fn test_non_string_bucket_values_become_unknown() {
        let json = r#"{
            "age": 17,
            "cycleLength": 28,
            "periodDuration": ["4_5"],
            "flowHeaviness": true,
            "painLevel": { "level": "severe" }
        }"#;
        let answers: AssessmentAnswers = serde_json::from_str(json).unwrap();

        assert_eq!(answers.age, Some(AgeRange::Unknown));
        assert_eq!(answers.cycle_length, Some(CycleLength::Unknown));
        assert_eq!(answers.period_duration, Some(PeriodDuration::Unknown));
        assert_eq!(answers.flow_heaviness, Some(FlowHeaviness::Unknown));
        assert_eq!(answers.pain_level, Some(PainLevel::Unknown));
    }

    #[test]
    fn test_null_bucket_reads_as_missing() {
        let answers: AssessmentAnswers = serde_json::from_str(r#"{"cycleLength": null}"#).unwrap();
        assert_eq!(answers.cycle_length, None);
    }

    #[test]
    fn test_flat_symptom_list_reads_as_physical() {
        let answers: AssessmentAnswers =
            serde_json::from_str(r#"{"symptoms": ["Fatigue", "Bloating", 3]}"#).unwrap();

        assert!(answers.symptoms.has_physical("fatigue"));
        assert_eq!(answers.symptoms.physical.len(), 2);
        assert!(answers.symptoms.emotional.is_empty());
    }

    #[test]
    fn test_symptom_field_shapes() {
        let answers: AssessmentAnswers = serde_json::from_str(
            r#"{"symptoms": {"physical": "Fatigue", "emotional": 5}}"#,
        )
        .unwrap();
        assert!(answers.symptoms.has_physical("Fatigue"));
        assert!(answers.symptoms.emotional.is_empty());

        let answers: AssessmentAnswers =
            serde_json::from_str(r#"{"symptoms": null}"#).unwrap();
        assert!(answers.symptoms.is_empty());

        let answers: AssessmentAnswers =
            serde_json::from_str(r#"{"symptoms": 42}"#).unwrap();
        assert!(answers.symptoms.is_empty());
    }
}
