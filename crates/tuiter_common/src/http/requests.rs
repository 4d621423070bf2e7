use serde::{Deserialize, Serialize};

/// Body of `POST /api/tuits`. The author is referenced by hex id and
/// resolved to an `ObjectId` at the DAO boundary.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTuitRequest {
    pub tuit: String,
    pub posted_by: String,
}

/// Body of `POST /api/users/<uid>/messages/<xuid>`. Sender and recipient
/// come from the path.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewMessageRequest {
    pub message: String,
}
