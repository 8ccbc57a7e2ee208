use serde_json::Value;

use super::{
    asset_url::{FullSolutionUrl, KscDiagramUrl, QuestionDiagramUrl},
    error::SchemaError,
    kind::{LatexStatus, QuestionLevel, QuestionType},
    question::QuestionInfo,
};

const INFO_NULLS: &[&str] = &["explanationVideo", "hintVideo", "solutionVideo"];

const QUESTION_NULLS: &[&str] = &[
    "questionText",
    "fullSolutionVideoUrl",
    "fullVideoSolutionUrl",
    "keywords",
    "explanationVideo",
    "hintVideo",
    "solutionVideo",
];

const KSC_NULLS: &[&str] = &[
    "clusterList",
    "topic",
    "subject",
    "kscClusterName",
    "courseList",
    "videoLink",
];

/// Parses a question payload, checking every constrained field first so a
/// violation comes back with its path.
pub fn parse_question_info(json: &str) -> Result<QuestionInfo, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

pub fn from_value(value: Value) -> Result<QuestionInfo, SchemaError> {
    validate(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// First constraint violation in the payload, if any.
pub fn validate(value: &Value) -> Result<(), SchemaError> {
    match violations(value).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Every constraint violation in the payload, in document order.
pub fn violations(value: &Value) -> Vec<SchemaError> {
    let mut walker = Walker::default();
    walker.question_info(value);
    walker.found
}

#[derive(Default)]
struct Walker {
    found: Vec<SchemaError>,
}

impl Walker {
    fn report(&mut self, violation: SchemaError) {
        log::debug!("{}", violation);
        self.found.push(violation);
    }

    fn question_info(&mut self, value: &Value) {
        if !value.is_object() {
            self.report(SchemaError::violation("$", "an object"));
            return;
        }

        match value.get("questionData") {
            Some(data) if data.is_object() => self.question_data(data, "questionData"),
            _ => self.report(SchemaError::violation("questionData", "an object")),
        }

        match value.get("kscDataList").and_then(|v| v.as_array()) {
            Some(list) => list
                .iter()
                .enumerate()
                .for_each(|(index, ksc)| self.ksc(ksc, &format!("kscDataList[{}]", index))),
            None => self.report(SchemaError::violation("kscDataList", "an array")),
        }

        if !value.get("debugData").is_some_and(Value::is_string) {
            self.report(SchemaError::violation("debugData", "a string"));
        }

        self.nulls(value, "", INFO_NULLS);
    }

    fn question_data(&mut self, data: &Value, path: &str) {
        self.parsed(data, path, "questionDiagramURL", |v| {
            string_field(v).and_then(QuestionDiagramUrl::parse).map(drop)
        });
        self.parsed(data, path, "fullSolutionURL", |v| {
            string_field(v).and_then(FullSolutionUrl::parse).map(drop)
        });
        self.parsed(data, path, "questionLevelId", |v| {
            number_field(v, "one of 1, 2")
                .and_then(<QuestionLevel as TryFrom<f64>>::try_from)
                .map(drop)
        });
        self.parsed(data, path, "questionTypeEnumId", |v| {
            number_field(v, "one of 1, 3, 4")
                .and_then(<QuestionType as TryFrom<f64>>::try_from)
                .map(drop)
        });
        self.parsed(data, path, "latexStatus", |v| match v.as_str() {
            Some(s) if s == LatexStatus::N.as_str() => Ok(()),
            _ => Err(SchemaError::violation("", format!("\"N\" (got {})", v))),
        });
        self.parsed(data, path, "pastYearAppearance", |v| match v {
            Value::Null | Value::String(_) => Ok(()),
            other => Err(SchemaError::violation(
                "",
                format!("a string or null (got {})", other),
            )),
        });

        self.nulls(data, path, QUESTION_NULLS);
    }

    fn ksc(&mut self, ksc: &Value, path: &str) {
        if !ksc.is_object() {
            self.report(SchemaError::violation(path, "an object"));
            return;
        }

        self.parsed(ksc, path, "kscDiagramURL", |v| {
            string_field(v).and_then(KscDiagramUrl::parse).map(drop)
        });

        self.nulls(ksc, path, KSC_NULLS);
    }

    fn parsed<F>(&mut self, parent: &Value, path: &str, key: &str, check: F)
    where
        F: FnOnce(&Value) -> Result<(), SchemaError>,
    {
        let field_path = join(path, key);
        match parent.get(key) {
            Some(value) => {
                if let Err(e) = check(value) {
                    self.report(e.at(&field_path));
                }
            }
            None => self.report(SchemaError::violation(field_path, "a value")),
        }
    }

    fn nulls(&mut self, parent: &Value, path: &str, keys: &[&str]) {
        for key in keys {
            match parent.get(*key) {
                Some(Value::Null) => {}
                Some(other) => {
                    self.report(SchemaError::violation(
                        join(path, key),
                        format!("null (got {})", other),
                    ));
                }
                None => self.report(SchemaError::violation(join(path, key), "an explicit null")),
            }
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn string_field(value: &Value) -> Result<String, SchemaError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SchemaError::violation("", format!("a string (got {})", value)))
}

fn number_field(value: &Value, expected: &str) -> Result<f64, SchemaError> {
    value
        .as_f64()
        .ok_or_else(|| SchemaError::violation("", format!("{} (got {})", expected, value)))
}
