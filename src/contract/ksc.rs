use serde::{Deserialize, Serialize};

use super::{asset_url::KscDiagramUrl, null::Null};

/// A knowledge-skill-component tied to a question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KscData {
    pub ksc_id: u64,
    pub ksc_code: String,
    pub cluster_list: Null,
    pub ksc_text: String,

    #[serde(rename = "kscDiagramURL")]
    pub ksc_diagram_url: KscDiagramUrl,

    pub topic: Null,
    pub subject: Null,
    pub ksc_cluster_name: Null,

    // the four counters below and `mark_for_revision` are zero/false in the
    // documented snapshot, see `snapshot`
    pub ksc_cluster_id: u32,
    pub created_by: u32,
    pub updated_by: u32,

    pub course_list: Null,
    pub video_link: Null,

    pub ksc_display_rank: u32,
    pub mark_for_revision: bool,
}
