use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::SchemaError;

/// Kind of a question, sent as `questionTypeEnumId`.
///
/// The codes are fixed by the content service; 2 is not assigned.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "f64", into = "i64")]
pub enum QuestionType {
    Objective,
    MultipleChoice,
    Numerical,
}

impl QuestionType {
    pub fn code(self) -> i64 {
        match self {
            Self::Objective => 1,
            Self::MultipleChoice => 3,
            Self::Numerical => 4,
        }
    }
}

impl TryFrom<i64> for QuestionType {
    type Error = SchemaError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Objective),
            3 => Ok(Self::MultipleChoice),
            4 => Ok(Self::Numerical),
            _ => Err(SchemaError::violation(
                "questionTypeEnumId",
                format!("one of 1, 3, 4 (got {})", code),
            )),
        }
    }
}

impl TryFrom<f64> for QuestionType {
    type Error = SchemaError;

    fn try_from(code: f64) -> Result<Self, Self::Error> {
        whole_code(code, "questionTypeEnumId", "one of 1, 3, 4")
            .and_then(<Self as TryFrom<i64>>::try_from)
    }
}

impl From<QuestionType> for i64 {
    fn from(value: QuestionType) -> Self {
        value.code()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Objective => "objective",
            Self::MultipleChoice => "multiple-choice",
            Self::Numerical => "numerical",
        };
        write!(f, "{}", name)
    }
}

/// Difficulty of a question, sent as `questionLevelId`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "f64", into = "i64")]
pub enum QuestionLevel {
    One,
    Two,
}

impl QuestionLevel {
    pub fn code(self) -> i64 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<i64> for QuestionLevel {
    type Error = SchemaError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(SchemaError::violation(
                "questionLevelId",
                format!("one of 1, 2 (got {})", code),
            )),
        }
    }
}

impl TryFrom<f64> for QuestionLevel {
    type Error = SchemaError;

    fn try_from(code: f64) -> Result<Self, Self::Error> {
        whole_code(code, "questionLevelId", "one of 1, 2")
            .and_then(<Self as TryFrom<i64>>::try_from)
    }
}

impl From<QuestionLevel> for i64 {
    fn from(value: QuestionLevel) -> Self {
        value.code()
    }
}

// JSON has a single number type, `2.0` is the same code as `2`
fn whole_code(code: f64, field: &str, expected: &str) -> Result<i64, SchemaError> {
    if code.is_finite() && code.fract() == 0.0 && code.abs() <= i64::MAX as f64 {
        Ok(code as i64)
    } else {
        Err(SchemaError::violation(field, format!("{} (got {})", expected, code)))
    }
}

/// `latexStatus` only ever carries "N".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatexStatus {
    #[default]
    #[serde(rename = "N")]
    N,
}

impl LatexStatus {
    pub fn as_str(self) -> &'static str {
        "N"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_codes() {
        assert_eq!(QuestionType::try_from(1i64).unwrap(), QuestionType::Objective);
        assert_eq!(QuestionType::try_from(3i64).unwrap(), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::try_from(4i64).unwrap(), QuestionType::Numerical);
        for code in [0i64, 2, 5, -1] {
            assert!(QuestionType::try_from(code).is_err(), "code {} accepted", code);
        }
    }

    #[test]
    fn question_type_serializes_as_code() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "3");
        let parsed: QuestionType = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, QuestionType::Numerical);
        assert!(serde_json::from_str::<QuestionType>("2").is_err());
    }

    #[test]
    fn question_level_is_one_or_two() {
        assert_eq!(QuestionLevel::try_from(1i64).unwrap(), QuestionLevel::One);
        assert_eq!(QuestionLevel::try_from(2i64).unwrap(), QuestionLevel::Two);
        let err = QuestionLevel::try_from(3i64).unwrap_err();
        assert_eq!(err.path(), Some("questionLevelId"));
        assert!(serde_json::from_str::<QuestionLevel>("0").is_err());
    }

    #[test]
    fn whole_floats_are_codes() {
        assert_eq!(QuestionLevel::try_from(2.0f64).unwrap(), QuestionLevel::Two);
        assert_eq!(QuestionType::try_from(4.0f64).unwrap(), QuestionType::Numerical);
        let parsed: QuestionLevel = serde_json::from_str("1.0").unwrap();
        assert_eq!(parsed, QuestionLevel::One);

        let err = QuestionLevel::try_from(1.5f64).unwrap_err();
        assert_eq!(err.path(), Some("questionLevelId"));
        assert!(QuestionType::try_from(2.0f64).is_err());
        assert!(QuestionType::try_from(f64::NAN).is_err());
        assert_eq!(serde_json::to_string(&QuestionLevel::Two).unwrap(), "2");
    }

    #[test]
    fn latex_status_only_accepts_n() {
        let parsed: LatexStatus = serde_json::from_str(r#""N""#).unwrap();
        assert_eq!(parsed, LatexStatus::N);
        assert!(serde_json::from_str::<LatexStatus>(r#""Y""#).is_err());
        assert_eq!(serde_json::to_string(&LatexStatus::N).unwrap(), r#""N""#);
    }
}
