use super::{fetch_by_ids, parse_object_id, store_error, FOLLOWS, USERS};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOneOptions;
use mongodb::{Collection, Database};
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{FollowWithFollowee, FollowWithFollower, WriteAck};
use tuiter_common::models::{Follow, User};

pub struct FollowDao {
    follows: Collection<Follow>,
    users: Collection<User>,
}

impl FollowDao {
    pub fn new(db: &Database) -> Self {
        Self {
            follows: db.collection(FOLLOWS),
            users: db.collection(USERS),
        }
    }

    /// Users that `uid` follows, followee side joined in.
    pub async fn find_followed_users(
        &self,
        uid: &str,
    ) -> Result<Vec<FollowWithFollowee>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .follows
            .find(doc! { "userFollowing": oid }, None)
            .await
            .map_err(store_error)?;
        let follows: Vec<Follow> = cursor.try_collect().await.map_err(store_error)?;
        let ids = follows
            .iter()
            .filter_map(|follow| follow.user_followed_by)
            .collect();
        let mut users = fetch_by_ids(&self.users, ids, |user: &User| user.id).await?;
        Ok(follows
            .into_iter()
            .map(|follow| FollowWithFollowee {
                id: follow.id,
                user_following: follow.user_following,
                user_followed_by: follow.user_followed_by.and_then(|id| users.remove(&id)),
            })
            .collect())
    }

    /// Users following `uid`, follower side joined in.
    pub async fn find_followers(
        &self,
        uid: &str,
    ) -> Result<Vec<FollowWithFollower>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .follows
            .find(doc! { "userFollowedBy": oid }, None)
            .await
            .map_err(store_error)?;
        let follows: Vec<Follow> = cursor.try_collect().await.map_err(store_error)?;
        let ids = follows
            .iter()
            .filter_map(|follow| follow.user_following)
            .collect();
        let mut users = fetch_by_ids(&self.users, ids, |user: &User| user.id).await?;
        Ok(follows
            .into_iter()
            .map(|follow| FollowWithFollower {
                id: follow.id,
                user_followed_by: follow.user_followed_by,
                user_following: follow.user_following.and_then(|id| users.remove(&id)),
            })
            .collect())
    }

    /// Records that `uid` follows `xuid`. Self-follows are rejected and the
    /// pair is unique.
    pub async fn user_follows_user(
        &self,
        uid: &str,
        xuid: &str,
    ) -> Result<Follow, TuiterServerError> {
        let follower = parse_object_id(uid)?;
        let followee = parse_object_id(xuid)?;
        if follower == followee {
            return Err(TuiterServerError::SelfReference);
        }
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 1 })
            .build();
        let existing = self
            .follows
            .find_one(
                doc! { "userFollowing": follower, "userFollowedBy": followee },
                options,
            )
            .await
            .map_err(store_error)?;
        if existing.is_some() {
            return Err(TuiterServerError::RelationExists(
                uid.to_string(),
                xuid.to_string(),
            ));
        }
        let mut follow = Follow {
            id: None,
            user_following: Some(follower),
            user_followed_by: Some(followee),
        };
        let result = self
            .follows
            .insert_one(&follow, None)
            .await
            .map_err(store_error)?;
        follow.id = result.inserted_id.as_object_id();
        Ok(follow)
    }

    pub async fn user_unfollows_user(
        &self,
        uid: &str,
        xuid: &str,
    ) -> Result<WriteAck, TuiterServerError> {
        let follower = parse_object_id(uid)?;
        let followee = parse_object_id(xuid)?;
        let result = self
            .follows
            .delete_one(
                doc! { "userFollowing": follower, "userFollowedBy": followee },
                None,
            )
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }
}
