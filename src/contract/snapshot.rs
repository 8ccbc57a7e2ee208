//! Values the documented contract snapshot pins to a single literal.
//!
//! The Rust types widen these to plain integers and booleans, since the
//! service may legitimately send other values for other questions. A
//! difference is reported here and logged, it never fails parsing.

use std::fmt;

use serde::Serialize;

use super::question::QuestionInfo;

pub const QUESTION_ID: u32 = 1832;
pub const CHAPTER_ID: u32 = 72;
pub const TOPIC_ID: u32 = 18;
pub const SUBJECT_ID: u32 = 2;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDeviation {
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for SnapshotDeviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} (snapshot value {})",
            self.path, self.actual, self.expected
        )
    }
}

pub fn snapshot_deviations(info: &QuestionInfo) -> Vec<SnapshotDeviation> {
    let mut deviations = Vec::new();
    let mut check = |path: String, expected: &dyn ToString, actual: &dyn ToString| {
        let (expected, actual) = (expected.to_string(), actual.to_string());
        if expected != actual {
            deviations.push(SnapshotDeviation {
                path,
                expected,
                actual,
            });
        }
    };

    let data = &info.question_data;
    check("questionData.questionId".into(), &QUESTION_ID, &data.question_id);
    check("questionData.chapterId".into(), &CHAPTER_ID, &data.chapter_id);
    check("questionData.topicId".into(), &TOPIC_ID, &data.topic_id);
    check("questionData.subjectId".into(), &SUBJECT_ID, &data.subject_id);

    for (index, ksc) in info.ksc_data_list.iter().enumerate() {
        let at = |key: &str| format!("kscDataList[{}].{}", index, key);
        check(at("kscClusterId"), &0, &ksc.ksc_cluster_id);
        check(at("createdBy"), &0, &ksc.created_by);
        check(at("updatedBy"), &0, &ksc.updated_by);
        check(at("kscDisplayRank"), &0, &ksc.ksc_display_rank);
        check(at("markForRevision"), &false, &ksc.mark_for_revision);
    }

    for deviation in &deviations {
        log::warn!("{}", deviation);
    }

    deviations
}
