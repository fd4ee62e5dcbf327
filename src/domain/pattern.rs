use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenstrualPattern {
    Regular,
    Irregular,
    Heavy,
    Pain,
    Developing,
}

impl MenstrualPattern {
    pub const ALL: [MenstrualPattern; 5] = [
        Self::Regular,
        Self::Irregular,
        Self::Heavy,
        Self::Pain,
        Self::Developing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Irregular => "irregular",
            Self::Heavy => "heavy",
            Self::Pain => "pain",
            Self::Developing => "developing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Regular => "Regular Menstrual Cycles",
            Self::Irregular => "Irregular Timing Pattern",
            Self::Heavy => "Heavy or Prolonged Flow Pattern",
            Self::Pain => "Pain-Predominant Pattern",
            Self::Developing => "Developing Pattern",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Regular => {
                "Your menstrual cycles follow a normal, healthy pattern according to ACOG guidelines."
            }
            Self::Irregular => {
                "Your cycle length is outside the typical range, which may indicate hormonal fluctuations."
            }
            Self::Heavy => {
                "Your flow is heavier or longer than typical, which could impact your daily activities."
            }
            Self::Pain => {
                "Your menstrual pain is higher than typical and may interfere with daily activities."
            }
            Self::Developing => {
                "Your cycles are still establishing a regular pattern, which is normal during adolescence."
            }
        }
    }
}

impl std::fmt::Display for MenstrualPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_labels() {
        assert_eq!(MenstrualPattern::Heavy.as_str(), "heavy");
        assert_eq!(MenstrualPattern::Pain.title(), "Pain-Predominant Pattern");
        assert_eq!(MenstrualPattern::Developing.to_string(), "developing");
    }

    #[test]
    fn test_every_pattern_has_text() {
        for pattern in MenstrualPattern::ALL {
            assert!(!pattern.title().is_empty());
            assert!(!pattern.description().is_empty());
        }
    }

    #[test]
    fn test_pattern_serde_tokens() {
        let json = serde_json::to_string(&MenstrualPattern::Irregular).unwrap();
        assert_eq!(json, "\"irregular\"");
        let parsed: MenstrualPattern = serde_json::from_str("\"regular\"").unwrap();
        assert_eq!(parsed, MenstrualPattern::Regular);
    }
}
