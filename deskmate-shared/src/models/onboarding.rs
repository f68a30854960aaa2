use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which onboarding steps are still to be shown to the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Onboarding {
    pub onboarding_a: bool,
    pub onboarding_b1: bool,
    pub onboarding_b2: bool,
    pub onboarding_b3: bool,
}

/// Partial update of [`Onboarding`]; absent fields are left untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnboardingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_a: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_b1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_b2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_b3: Option<bool>,
}

impl OnboardingUpdate {
    /// Update that marks every step as seen.
    #[must_use]
    pub const fn complete() -> Self {
        Self {
            onboarding_a: Some(false),
            onboarding_b1: Some(false),
            onboarding_b2: Some(false),
            onboarding_b3: Some(false),
        }
    }
}

/// Canned onboarding content configured for the user's organisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnboardingData {
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub onboarding_b1: String,
    #[serde(default)]
    pub onboarding_b2: String,
    #[serde(default)]
    pub onboarding_b3: String,
}

/// Identifies one of the quick onboarding questions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    OnboardingB1,
    OnboardingB2,
    OnboardingB3,
}

impl QuestionId {
    pub const ALL: [Self; 3] = [Self::OnboardingB1, Self::OnboardingB2, Self::OnboardingB3];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnboardingB1 => "onboarding_b1",
            Self::OnboardingB2 => "onboarding_b2",
            Self::OnboardingB3 => "onboarding_b3",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "onboarding_b1" | "b1" => Ok(Self::OnboardingB1),
            "onboarding_b2" | "b2" => Ok(Self::OnboardingB2),
            "onboarding_b3" | "b3" => Ok(Self::OnboardingB3),
            _ => Err("invalid onboarding question"),
        }
    }
}

impl OnboardingData {
    /// Text of the quick question identified by `id`.
    #[must_use]
    pub fn question(&self, id: QuestionId) -> &str {
        match id {
            QuestionId::OnboardingB1 => &self.onboarding_b1,
            QuestionId::OnboardingB2 => &self.onboarding_b2,
            QuestionId::OnboardingB3 => &self.onboarding_b3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tolerates_missing_fields() {
        let data: OnboardingData = serde_json::from_str(r#"{"greeting":"Hi!"}"#).unwrap();
        assert_eq!(data.greeting, "Hi!");
        assert_eq!(data.question(QuestionId::OnboardingB2), "");
    }

    #[test]
    fn partial_update_omits_unset_fields() {
        let update = OnboardingUpdate {
            onboarding_a: Some(false),
            ..OnboardingUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"onboarding_a":false}"#
        );
    }

    #[test]
    fn question_id_parses_short_and_long_forms() {
        assert_eq!("b1".parse::<QuestionId>(), Ok(QuestionId::OnboardingB1));
        assert_eq!(
            "onboarding_b3".parse::<QuestionId>(),
            Ok(QuestionId::OnboardingB3)
        );
        assert!("b4".parse::<QuestionId>().is_err());
    }
}
