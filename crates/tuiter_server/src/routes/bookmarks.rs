use crate::catchers::ErrorResponse;
use crate::mongo::BookmarkDao;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::{BookmarkWithTuit, BookmarkWithUser, WriteAck};
use tuiter_common::models::Bookmark;

/**
 * Tuits bookmarked by one user, tuit embedded under bookmarkedTuit.
 */
#[get("/api/users/<uid>/bookmarks")]
pub async fn find_tuits_bookmarked_by_user(
    uid: String,
    db: &State<BookmarkDao>,
) -> Result<Json<Vec<BookmarkWithTuit>>, ErrorResponse> {
    Ok(Json(db.find_tuits_bookmarked_by_user(&uid).await?))
}

/**
 * Users that bookmarked one tuit, user embedded under bookmarkedUser.
 */
#[get("/api/tuits/<tid>/bookmarks")]
pub async fn find_users_that_bookmarked_tuit(
    tid: String,
    db: &State<BookmarkDao>,
) -> Result<Json<Vec<BookmarkWithUser>>, ErrorResponse> {
    Ok(Json(db.find_users_that_bookmarked_tuit(&tid).await?))
}

/**
 * Record that a user bookmarks a tuit.
 *
 * @return status:
 *             * 201 with the created bookmark
 *             * 400 if either id is malformed
 *             * 409 if this user already bookmarked this tuit
 */
#[post("/api/users/<uid>/bookmarks/<tid>")]
pub async fn user_bookmarks_tuit(
    uid: String,
    tid: String,
    db: &State<BookmarkDao>,
) -> Result<Created<Json<Bookmark>>, ErrorResponse> {
    let bookmark = db.user_bookmarks_tuit(&uid, &tid).await?;
    Ok(Created::new(format!("/api/users/{}/bookmarks", uid)).body(Json(bookmark)))
}

#[delete("/api/users/<uid>/bookmarks/<tid>")]
pub async fn user_unbookmarks_tuit(
    uid: String,
    tid: String,
    db: &State<BookmarkDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.user_unbookmarks_tuit(&uid, &tid).await?))
}
