use crate::catchers::ErrorResponse;
use crate::mongo::FollowDao;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::{FollowWithFollowee, FollowWithFollower, WriteAck};
use tuiter_common::models::Follow;

/**
 * Users that `uid` follows, followee embedded under userFollowedBy.
 */
#[get("/api/users/<uid>/follows")]
pub async fn find_followed_users(
    uid: String,
    db: &State<FollowDao>,
) -> Result<Json<Vec<FollowWithFollowee>>, ErrorResponse> {
    Ok(Json(db.find_followed_users(&uid).await?))
}

/**
 * Users following `uid`, follower embedded under userFollowing.
 */
#[get("/api/users/<uid>/followedby")]
pub async fn find_followers(
    uid: String,
    db: &State<FollowDao>,
) -> Result<Json<Vec<FollowWithFollower>>, ErrorResponse> {
    Ok(Json(db.find_followers(&uid).await?))
}

/**
 * Record that `uid` follows `xuid`.
 *
 * @return status:
 *             * 201 with the created follow
 *             * 400 if either id is malformed or uid == xuid
 *             * 409 if the follow already exists
 */
#[post("/api/users/<uid>/follows/<xuid>")]
pub async fn user_follows_user(
    uid: String,
    xuid: String,
    db: &State<FollowDao>,
) -> Result<Created<Json<Follow>>, ErrorResponse> {
    let follow = db.user_follows_user(&uid, &xuid).await?;
    Ok(Created::new(format!("/api/users/{}/follows", uid)).body(Json(follow)))
}

#[delete("/api/users/<uid>/follows/<xuid>")]
pub async fn user_unfollows_user(
    uid: String,
    xuid: String,
    db: &State<FollowDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.user_unfollows_user(&uid, &xuid).await?))
}
