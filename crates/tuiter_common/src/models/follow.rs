use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// `user_following` is the follower, `user_followed_by` the followee.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_following: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_followed_by: Option<ObjectId>,
}
