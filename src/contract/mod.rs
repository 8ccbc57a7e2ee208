mod asset_url;
mod error;
mod kind;
mod ksc;
mod null;
mod question;
mod snapshot;
mod summary;
mod validate;

pub use asset_url::{FullSolutionUrl, KscDiagramUrl, QuestionDiagramUrl, ASSET_BASE_URL};
pub use error::SchemaError;
pub use kind::{LatexStatus, QuestionLevel, QuestionType};
pub use ksc::KscData;
pub use null::{required_nullable, Null};
pub use question::{QuestionData, QuestionInfo};
pub use snapshot::{
    snapshot_deviations, SnapshotDeviation, CHAPTER_ID, QUESTION_ID, SUBJECT_ID, TOPIC_ID,
};
pub use summary::summarize;
pub use validate::{from_value, parse_question_info, validate, violations};
