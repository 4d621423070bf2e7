use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// One like per user-tuit pair, enforced on insert
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuit: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<ObjectId>,
}
