use super::{fetch_by_ids, parse_object_id, store_error, LIKES, TUITS, USERS};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOneOptions;
use mongodb::{Collection, Database};
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{LikeWithTuit, LikeWithUser, WriteAck};
use tuiter_common::models::{Like, Tuit, User};

pub struct LikeDao {
    likes: Collection<Like>,
    users: Collection<User>,
    tuits: Collection<Tuit>,
}

impl LikeDao {
    pub fn new(db: &Database) -> Self {
        Self {
            likes: db.collection(LIKES),
            users: db.collection(USERS),
            tuits: db.collection(TUITS),
        }
    }

    /// Likes of one tuit, with each liking user joined in via a single
    /// batched `$in` fetch.
    pub async fn find_users_that_liked_tuit(
        &self,
        tid: &str,
    ) -> Result<Vec<LikeWithUser>, TuiterServerError> {
        let oid = parse_object_id(tid)?;
        let cursor = self
            .likes
            .find(doc! { "tuit": oid }, None)
            .await
            .map_err(store_error)?;
        let likes: Vec<Like> = cursor.try_collect().await.map_err(store_error)?;
        let ids = likes.iter().filter_map(|like| like.liked_by).collect();
        let mut users = fetch_by_ids(&self.users, ids, |user: &User| user.id).await?;
        Ok(likes
            .into_iter()
            .map(|like| LikeWithUser {
                id: like.id,
                tuit: like.tuit,
                liked_by: like.liked_by.and_then(|id| users.remove(&id)),
            })
            .collect())
    }

    /// Tuits liked by one user, tuit side joined in.
    pub async fn find_tuits_liked_by_user(
        &self,
        uid: &str,
    ) -> Result<Vec<LikeWithTuit>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .likes
            .find(doc! { "likedBy": oid }, None)
            .await
            .map_err(store_error)?;
        let likes: Vec<Like> = cursor.try_collect().await.map_err(store_error)?;
        let ids = likes.iter().filter_map(|like| like.tuit).collect();
        let mut tuits = fetch_by_ids(&self.tuits, ids, |tuit: &Tuit| tuit.id).await?;
        Ok(likes
            .into_iter()
            .map(|like| LikeWithTuit {
                id: like.id,
                liked_by: like.liked_by,
                tuit: like.tuit.and_then(|id| tuits.remove(&id)),
            })
            .collect())
    }

    /// Records the like. One like per user-tuit pair; a second like of the
    /// same tuit conflicts.
    pub async fn user_likes_tuit(&self, uid: &str, tid: &str) -> Result<Like, TuiterServerError> {
        let user = parse_object_id(uid)?;
        let tuit = parse_object_id(tid)?;
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 1 })
            .build();
        let existing = self
            .likes
            .find_one(doc! { "tuit": tuit, "likedBy": user }, options)
            .await
            .map_err(store_error)?;
        if existing.is_some() {
            return Err(TuiterServerError::RelationExists(
                uid.to_string(),
                tid.to_string(),
            ));
        }
        let mut like = Like {
            id: None,
            tuit: Some(tuit),
            liked_by: Some(user),
        };
        let result = self.likes.insert_one(&like, None).await.map_err(store_error)?;
        like.id = result.inserted_id.as_object_id();
        Ok(like)
    }

    pub async fn user_unlikes_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<WriteAck, TuiterServerError> {
        let user = parse_object_id(uid)?;
        let tuit = parse_object_id(tid)?;
        let result = self
            .likes
            .delete_one(doc! { "tuit": tuit, "likedBy": user }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }
}
