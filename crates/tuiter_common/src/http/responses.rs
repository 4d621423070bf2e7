use crate::models::{Tuit, User};
use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

/// Uniform acknowledgement for every update/delete operation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WriteAck {
    pub matched_count: u64,
    pub modified_count: u64,
    pub deleted_count: u64,
}

impl WriteAck {
    pub fn updated(matched_count: u64, modified_count: u64) -> Self {
        Self {
            matched_count,
            modified_count,
            deleted_count: 0,
        }
    }

    pub fn deleted(deleted_count: u64) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            deleted_count,
        }
    }
}

// Populated read shapes. The reference the query resolved is embedded as a
// full document; a dangling reference leaves it None instead of failing the
// read. The unresolved side keeps its raw id.

/// Tuit with its author resolved, returned by `GET /api/tuits/<tid>`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TuitWithAuthor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_on: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<User>,
}

/// Like with the liking user resolved (likes of one tuit).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LikeWithUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuit: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<User>,
}

/// Like with the liked tuit resolved (likes by one user).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LikeWithTuit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuit: Option<Tuit>,
}

/// Follow with the followee resolved (who a user follows).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FollowWithFollowee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_following: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_followed_by: Option<User>,
}

/// Follow with the follower resolved (a user's followers).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FollowWithFollower {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_followed_by: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_following: Option<User>,
}

/// Bookmark with the bookmarked tuit resolved (bookmarks of one user).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkWithTuit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarked_user: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarked_tuit: Option<Tuit>,
}

/// Bookmark with the bookmarking user resolved (bookmarks of one tuit).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkWithUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarked_tuit: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarked_user: Option<User>,
}
