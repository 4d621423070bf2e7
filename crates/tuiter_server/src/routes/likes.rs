use crate::catchers::ErrorResponse;
use crate::mongo::LikeDao;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::{LikeWithTuit, LikeWithUser, WriteAck};
use tuiter_common::models::Like;

/**
 * Tuits liked by one user, each like carrying the liked tuit in full.
 */
#[get("/api/users/<uid>/likes")]
pub async fn find_tuits_liked_by_user(
    uid: String,
    db: &State<LikeDao>,
) -> Result<Json<Vec<LikeWithTuit>>, ErrorResponse> {
    Ok(Json(db.find_tuits_liked_by_user(&uid).await?))
}

/**
 * Users that liked one tuit, each like carrying the liking user in full.
 */
#[get("/api/tuits/<tid>/likes")]
pub async fn find_users_that_liked_tuit(
    tid: String,
    db: &State<LikeDao>,
) -> Result<Json<Vec<LikeWithUser>>, ErrorResponse> {
    Ok(Json(db.find_users_that_liked_tuit(&tid).await?))
}

/**
 * Record that a user likes a tuit.
 *
 * @return status:
 *             * 201 with the created like
 *             * 400 if either id is malformed
 *             * 409 if this user already likes this tuit
 */
#[post("/api/users/<uid>/likes/<tid>")]
pub async fn user_likes_tuit(
    uid: String,
    tid: String,
    db: &State<LikeDao>,
) -> Result<Created<Json<Like>>, ErrorResponse> {
    let like = db.user_likes_tuit(&uid, &tid).await?;
    Ok(Created::new(format!("/api/tuits/{}/likes", tid)).body(Json(like)))
}

/**
 * Record that a user no longer likes a tuit. Acks zero when the like never
 * existed.
 */
#[delete("/api/users/<uid>/likes/<tid>")]
pub async fn user_unlikes_tuit(
    uid: String,
    tid: String,
    db: &State<LikeDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.user_unlikes_tuit(&uid, &tid).await?))
}
