use crate::{DATABASE_NAME, MONGODB_URI};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;
use tuiter_common::errors::TuiterServerError;

mod bookmarks;
mod follows;
mod likes;
mod messages;
mod tuits;
mod users;

pub use bookmarks::BookmarkDao;
pub use follows::FollowDao;
pub use likes::LikeDao;
pub use messages::MessageDao;
pub use tuits::TuitDao;
pub use users::UserDao;

pub(crate) const USERS: &str = "users";
pub(crate) const TUITS: &str = "tuits";
pub(crate) const LIKES: &str = "likes";
pub(crate) const FOLLOWS: &str = "follows";
pub(crate) const BOOKMARKS: &str = "bookmarks";
pub(crate) const MESSAGES: &str = "messages";

/// Opens the process-wide database handle. Called once at startup; the
/// individual DAOs borrow collections from the returned database.
pub async fn connect() -> Result<Database, TuiterServerError> {
    let mut client_options = ClientOptions::parse(&**MONGODB_URI)
        .await
        .map_err(store_error)?;
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);
    let client = Client::with_options(client_options).map_err(store_error)?;
    Ok(client.database(&**DATABASE_NAME))
}

/// Drops the entire database to start off with clean state for testing.
#[cfg(test)]
pub async fn drop_database(database_name: &str) -> Result<(), TuiterServerError> {
    let mut client_options = ClientOptions::parse(&**MONGODB_URI)
        .await
        .map_err(store_error)?;
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);
    let client = Client::with_options(client_options).map_err(store_error)?;
    client
        .database(database_name)
        .drop(None)
        .await
        .map_err(store_error)
}

/// Path-parameter ids arrive as hex strings; a parse failure is the caller's
/// 400, not a store error.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, TuiterServerError> {
    ObjectId::parse_str(id).map_err(|_| TuiterServerError::MalformedId(id.to_string()))
}

/// Classifies driver failures: connectivity problems surface as 503, the
/// rest as 500.
pub(crate) fn store_error(e: mongodb::error::Error) -> TuiterServerError {
    error!(error = %e, "mongodb operation failed");
    match *e.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            TuiterServerError::StoreUnavailable(e.to_string())
        }
        _ => TuiterServerError::MongoError(e.to_string()),
    }
}

/// Serializes a partial-update body into a `$set` document. Unset fields
/// are skipped by serde, so only named fields are overwritten; `_id` is
/// never part of the merge.
pub(crate) fn to_set_document<T: Serialize>(value: &T) -> Result<Document, TuiterServerError> {
    let mut document =
        bson::to_document(value).map_err(|e| TuiterServerError::MongoError(e.to_string()))?;
    document.remove("_id");
    Ok(document)
}

/// Batched half of a populate read: one `$in` fetch of all referenced ids,
/// keyed for the in-memory merge. Missing documents simply stay absent from
/// the map, which leaves the reference unresolved in the response.
pub(crate) async fn fetch_by_ids<T, F>(
    collection: &Collection<T>,
    ids: Vec<ObjectId>,
    id_of: F,
) -> Result<HashMap<ObjectId, T>, TuiterServerError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
    F: Fn(&T) -> Option<ObjectId>,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let cursor = collection
        .find(doc! { "_id": { "$in": ids } }, None)
        .await
        .map_err(store_error)?;
    let documents: Vec<T> = cursor.try_collect().await.map_err(store_error)?;
    Ok(documents
        .into_iter()
        .filter_map(|document| id_of(&document).map(|id| (id, document)))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use tuiter_common::models::User;

    #[test]
    fn parse_object_id_accepts_hex() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn parse_object_id_rejects_garbage() {
        match parse_object_id("not-an-id") {
            Err(TuiterServerError::MalformedId(id)) => assert_eq!(id, "not-an-id"),
            other => panic!("expected MalformedId, got {:?}", other),
        }
    }

    #[test]
    fn set_document_skips_unset_fields_and_id() {
        let user = User {
            id: Some(ObjectId::new()),
            email: Some(String::from("alice@tuiter.com")),
            ..Default::default()
        };
        let document = to_set_document(&user).unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.get_str("email").unwrap(), "alice@tuiter.com");
    }
}
