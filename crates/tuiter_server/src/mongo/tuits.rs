use super::{parse_object_id, store_error, to_set_document, TUITS, USERS};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::DateTime;
use mongodb::{Collection, Database};
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::requests::NewTuitRequest;
use tuiter_common::http::responses::{TuitWithAuthor, WriteAck};
use tuiter_common::models::{Tuit, User};

pub struct TuitDao {
    tuits: Collection<Tuit>,
    users: Collection<User>,
}

impl TuitDao {
    pub fn new(db: &Database) -> Self {
        Self {
            tuits: db.collection(TUITS),
            users: db.collection(USERS),
        }
    }

    pub async fn find_all_tuits(&self) -> Result<Vec<Tuit>, TuiterServerError> {
        let cursor = self.tuits.find(None, None).await.map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    pub async fn find_tuits_by_user(&self, uid: &str) -> Result<Vec<Tuit>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .tuits
            .find(doc! { "postedBy": oid }, None)
            .await
            .map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    /// Single-document read with the author joined in. A dangling
    /// `postedBy` leaves the field unresolved rather than failing the read.
    pub async fn find_tuit_by_id(
        &self,
        tid: &str,
    ) -> Result<Option<TuitWithAuthor>, TuiterServerError> {
        let oid = parse_object_id(tid)?;
        let tuit = match self
            .tuits
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_error)?
        {
            Some(tuit) => tuit,
            None => return Ok(None),
        };
        let author = match tuit.posted_by {
            Some(author_id) => self
                .users
                .find_one(doc! { "_id": author_id }, None)
                .await
                .map_err(store_error)?,
            None => None,
        };
        Ok(Some(TuitWithAuthor {
            id: tuit.id,
            tuit: tuit.tuit,
            posted_on: tuit.posted_on,
            posted_by: author,
        }))
    }

    pub async fn create_tuit(&self, request: NewTuitRequest) -> Result<Tuit, TuiterServerError> {
        let author = parse_object_id(&request.posted_by)?;
        let mut tuit = Tuit {
            id: None,
            tuit: Some(request.tuit),
            posted_on: Some(DateTime::now()),
            posted_by: Some(author),
        };
        let result = self.tuits.insert_one(&tuit, None).await.map_err(store_error)?;
        tuit.id = result.inserted_id.as_object_id();
        Ok(tuit)
    }

    pub async fn update_tuit(&self, tid: &str, tuit: &Tuit) -> Result<WriteAck, TuiterServerError> {
        let oid = parse_object_id(tid)?;
        let set = to_set_document(tuit)?;
        if set.is_empty() {
            return Ok(WriteAck::updated(0, 0));
        }
        let result = self
            .tuits
            .update_one(doc! { "_id": oid }, doc! { "$set": set }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::updated(result.matched_count, result.modified_count))
    }

    pub async fn delete_tuit(&self, tid: &str) -> Result<WriteAck, TuiterServerError> {
        let oid = parse_object_id(tid)?;
        let result = self
            .tuits
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }
}
