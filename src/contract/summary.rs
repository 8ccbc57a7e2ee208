use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeMap;

use super::question::QuestionInfo;

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum SummaryField<'a> {
    Id(u32),
    Code(i64),
    Text(&'a str),
    Seconds(Option<f64>),
    Ksc(Vec<KscSummary<'a>>),
}

#[derive(Serialize, Debug)]
struct KscSummary<'a> {
    id: u64,
    code: &'a str,
    text: &'a str,
    diagram: &'a str,
}

/// YAML digest of a question: identifiers, kind, assets and KSCs.
pub fn summarize(info: &QuestionInfo) -> anyhow::Result<String> {
    let data = &info.question_data;
    let question_type = data.question_type.to_string();

    let mut map = BTreeMap::<&str, SummaryField>::new();
    map.insert("question_id", SummaryField::Id(data.question_id));
    map.insert("code", SummaryField::Text(data.question_code.as_str()));
    map.insert("type", SummaryField::Text(question_type.as_str()));
    map.insert("level", SummaryField::Code(data.question_level.code()));
    map.insert("chapter_id", SummaryField::Id(data.chapter_id));
    map.insert("topic_id", SummaryField::Id(data.topic_id));
    map.insert("subject_id", SummaryField::Id(data.subject_id));
    map.insert(
        "diagram",
        SummaryField::Text(data.question_diagram_url.as_str()),
    );
    map.insert("solution", SummaryField::Text(data.full_solution_url.as_str()));
    map.insert(
        "average_time_secs",
        SummaryField::Seconds(data.average_time_taken_secs()),
    );
    map.insert(
        "ksc",
        SummaryField::Ksc(
            info.ksc_data_list
                .iter()
                .map(|ksc| KscSummary {
                    id: ksc.ksc_id,
                    code: ksc.ksc_code.as_str(),
                    text: ksc.ksc_text.as_str(),
                    diagram: ksc.ksc_diagram_url.as_str(),
                })
                .collect(),
        ),
    );

    serde_yaml_ng::to_string(&map).context("failed to serialize question summary")
}
