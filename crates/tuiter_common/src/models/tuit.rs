use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tuit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_on: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<ObjectId>,
}
