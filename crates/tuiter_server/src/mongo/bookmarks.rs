use super::{fetch_by_ids, parse_object_id, store_error, BOOKMARKS, TUITS, USERS};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOneOptions;
use mongodb::{Collection, Database};
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{BookmarkWithTuit, BookmarkWithUser, WriteAck};
use tuiter_common::models::{Bookmark, Tuit, User};

pub struct BookmarkDao {
    bookmarks: Collection<Bookmark>,
    users: Collection<User>,
    tuits: Collection<Tuit>,
}

impl BookmarkDao {
    pub fn new(db: &Database) -> Self {
        Self {
            bookmarks: db.collection(BOOKMARKS),
            users: db.collection(USERS),
            tuits: db.collection(TUITS),
        }
    }

    /// Tuits bookmarked by one user, tuit side joined in.
    pub async fn find_tuits_bookmarked_by_user(
        &self,
        uid: &str,
    ) -> Result<Vec<BookmarkWithTuit>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .bookmarks
            .find(doc! { "bookmarkedUser": oid }, None)
            .await
            .map_err(store_error)?;
        let bookmarks: Vec<Bookmark> = cursor.try_collect().await.map_err(store_error)?;
        let ids = bookmarks
            .iter()
            .filter_map(|bookmark| bookmark.bookmarked_tuit)
            .collect();
        let mut tuits = fetch_by_ids(&self.tuits, ids, |tuit: &Tuit| tuit.id).await?;
        Ok(bookmarks
            .into_iter()
            .map(|bookmark| BookmarkWithTuit {
                id: bookmark.id,
                bookmarked_user: bookmark.bookmarked_user,
                bookmarked_tuit: bookmark.bookmarked_tuit.and_then(|id| tuits.remove(&id)),
            })
            .collect())
    }

    /// Users that bookmarked one tuit, user side joined in.
    pub async fn find_users_that_bookmarked_tuit(
        &self,
        tid: &str,
    ) -> Result<Vec<BookmarkWithUser>, TuiterServerError> {
        let oid = parse_object_id(tid)?;
        let cursor = self
            .bookmarks
            .find(doc! { "bookmarkedTuit": oid }, None)
            .await
            .map_err(store_error)?;
        let bookmarks: Vec<Bookmark> = cursor.try_collect().await.map_err(store_error)?;
        let ids = bookmarks
            .iter()
            .filter_map(|bookmark| bookmark.bookmarked_user)
            .collect();
        let mut users = fetch_by_ids(&self.users, ids, |user: &User| user.id).await?;
        Ok(bookmarks
            .into_iter()
            .map(|bookmark| BookmarkWithUser {
                id: bookmark.id,
                bookmarked_tuit: bookmark.bookmarked_tuit,
                bookmarked_user: bookmark.bookmarked_user.and_then(|id| users.remove(&id)),
            })
            .collect())
    }

    pub async fn user_bookmarks_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<Bookmark, TuiterServerError> {
        let user = parse_object_id(uid)?;
        let tuit = parse_object_id(tid)?;
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 1 })
            .build();
        let existing = self
            .bookmarks
            .find_one(doc! { "bookmarkedUser": user, "bookmarkedTuit": tuit }, options)
            .await
            .map_err(store_error)?;
        if existing.is_some() {
            return Err(TuiterServerError::RelationExists(
                uid.to_string(),
                tid.to_string(),
            ));
        }
        let mut bookmark = Bookmark {
            id: None,
            bookmarked_user: Some(user),
            bookmarked_tuit: Some(tuit),
        };
        let result = self
            .bookmarks
            .insert_one(&bookmark, None)
            .await
            .map_err(store_error)?;
        bookmark.id = result.inserted_id.as_object_id();
        Ok(bookmark)
    }

    pub async fn user_unbookmarks_tuit(
        &self,
        uid: &str,
        tid: &str,
    ) -> Result<WriteAck, TuiterServerError> {
        let user = parse_object_id(uid)?;
        let tuit = parse_object_id(tid)?;
        let result = self
            .bookmarks
            .delete_one(doc! { "bookmarkedUser": user, "bookmarkedTuit": tuit }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }
}
