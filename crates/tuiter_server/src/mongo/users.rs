use super::{parse_object_id, store_error, to_set_document, USERS};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOneOptions;
use mongodb::{Collection, Database};
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::WriteAck;
use tuiter_common::models::User;

pub struct UserDao {
    users: Collection<User>,
}

impl UserDao {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS),
        }
    }

    pub async fn find_all_users(&self) -> Result<Vec<User>, TuiterServerError> {
        let cursor = self.users.find(None, None).await.map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    pub async fn find_user_by_id(&self, uid: &str) -> Result<Option<User>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        self.users
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_error)
    }

    /// Inserts the user and returns it with the generated id filled in.
    /// Usernames are unique across accounts.
    pub async fn create_user(&self, mut user: User) -> Result<User, TuiterServerError> {
        if let Some(username) = &user.username {
            let options = FindOneOptions::builder()
                .projection(doc! { "_id": 1 })
                .build();
            let existing = self
                .users
                .find_one(doc! { "username": username }, options)
                .await
                .map_err(store_error)?;
            if existing.is_some() {
                return Err(TuiterServerError::UsernameExists(username.clone()));
            }
        }
        user.id = None;
        let result = self.users.insert_one(&user, None).await.map_err(store_error)?;
        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    pub async fn update_user(&self, uid: &str, user: &User) -> Result<WriteAck, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let set = to_set_document(user)?;
        // Mongo rejects an empty $set
        if set.is_empty() {
            return Ok(WriteAck::updated(0, 0));
        }
        let result = self
            .users
            .update_one(doc! { "_id": oid }, doc! { "$set": set }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::updated(result.matched_count, result.modified_count))
    }

    pub async fn delete_user(&self, uid: &str) -> Result<WriteAck, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let result = self
            .users
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }

    /// Clears the collection. Exposed for test setup, same as the rest of
    /// the API surface.
    pub async fn delete_all_users(&self) -> Result<WriteAck, TuiterServerError> {
        let result = self
            .users
            .delete_many(doc! {}, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }
}
