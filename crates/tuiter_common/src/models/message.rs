use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_on: Option<DateTime>,
}
