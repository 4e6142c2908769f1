use serde::{Deserialize, Serialize};

crate::wire_enum! {
    /// Action a moderation rule applied to a piece of content.
    pub enum ModerationAction {
        Flag = "flag",
        Shadow = "shadow",
        Remove = "remove",
        Bounce = "bounce",
        BounceFlag = "bounce_flag",
        BounceRemove = "bounce_remove",
    }
}

/// Moderation verdict attached to activities and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationV2Response {
    pub action: ModerationAction,
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocklist_matched: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_filter_matched: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_harms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_harms: Option<Vec<String>>,
}
