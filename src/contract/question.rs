use serde::{Deserialize, Serialize};

use super::{
    asset_url::{FullSolutionUrl, QuestionDiagramUrl},
    kind::{LatexStatus, QuestionLevel, QuestionType},
    ksc::KscData,
    null::{required_nullable, Null},
};

/// One question as returned by the content service, with its KSC metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInfo {
    pub question_data: QuestionData,

    /// kept in the order the service sent them
    pub ksc_data_list: Vec<KscData>,

    /// diagnostic text owned by the service
    pub debug_data: String,

    pub explanation_video: Null,
    pub hint_video: Null,
    pub solution_video: Null,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    /// 1832 in the documented snapshot
    pub question_id: u32,

    pub question_text: Null,

    #[serde(rename = "questionDiagramURL")]
    pub question_diagram_url: QuestionDiagramUrl,

    /// encodes the correct answer selection
    pub answer_option: String,

    #[serde(rename = "fullSolutionURL")]
    pub full_solution_url: FullSolutionUrl,

    pub full_solution_video_url: Null,
    pub full_video_solution_url: Null,

    #[serde(rename = "questionLevelId")]
    pub question_level: QuestionLevel,

    pub question_code: String,

    /// 72 in the documented snapshot
    pub chapter_id: u32,

    /// 18 in the documented snapshot
    pub topic_id: u32,

    /// 2 in the documented snapshot
    pub subject_id: u32,

    #[serde(rename = "questionTypeEnumId")]
    pub question_type: QuestionType,

    pub keywords: Null,

    #[serde(deserialize_with = "required_nullable::deserialize")]
    pub past_year_appearance: Option<String>,

    pub question_score: f64,
    pub question_velocity: f64,

    /// seconds, sent as text
    pub average_time_taken_in_sec_correct_questions: String,

    /// question body as LaTeX
    #[serde(rename = "q_Latex")]
    pub q_latex: String,

    pub latex_status: LatexStatus,

    pub explanation_video: Null,
    pub hint_video: Null,
    pub solution_video: Null,
}

impl QuestionData {
    /// `averageTimeTakenInSecCorrectQuestions` as a number, `None` if the
    /// service sent something that isn't one.
    pub fn average_time_taken_secs(&self) -> Option<f64> {
        self.average_time_taken_in_sec_correct_questions
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite())
    }
}
