use crate::catchers::ErrorResponse;
use crate::mongo::UserDao;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::WriteAck;
use tuiter_common::models::User;

/**
 * Retrieve every user in the collection.
 *
 * @return status:
 *             * 200 with the (possibly empty) user array
 *             * 503 if the store is unreachable, 500 on other db failure
 */
#[get("/api/users")]
pub async fn find_all_users(db: &State<UserDao>) -> Result<Json<Vec<User>>, ErrorResponse> {
    Ok(Json(db.find_all_users().await?))
}

/**
 * Retrieve a single user by its primary key.
 *
 * @param uid - hex object id of the user
 * @return status:
 *             * 200 with the user
 *             * 400 if uid is not a valid object id
 *             * 404 if no user matches
 */
#[get("/api/users/<uid>")]
pub async fn find_user_by_id(
    uid: String,
    db: &State<UserDao>,
) -> Result<Json<User>, ErrorResponse> {
    match db.find_user_by_id(&uid).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ErrorResponse::NotFound(format!(
            "User {} does not exist",
            uid
        ))),
    }
}

/**
 * Create a new user from the request body.
 *
 * @return status:
 *             * 201 with the created user, including its generated id
 *             * 409 if the username is already taken
 */
#[post("/api/users", format = "json", data = "<request>")]
pub async fn create_user(
    request: Json<User>,
    db: &State<UserDao>,
) -> Result<Created<Json<User>>, ErrorResponse> {
    let user = db.create_user(request.into_inner()).await?;
    let location = user
        .id
        .map(|id| format!("/api/users/{}", id.to_hex()))
        .unwrap_or_else(|| String::from("/api/users"));
    Ok(Created::new(location).body(Json(user)))
}

/**
 * Partial-field merge into an existing user. Only fields named in the body
 * are overwritten.
 *
 * @return status:
 *             * 200 with the write acknowledgement (matched/modified counts)
 *             * 400 if uid is not a valid object id
 */
#[put("/api/users/<uid>", format = "json", data = "<request>")]
pub async fn update_user(
    uid: String,
    request: Json<User>,
    db: &State<UserDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.update_user(&uid, &request).await?))
}

/**
 * Delete a user by id. Deleting an absent user acks zero rather than
 * erroring, so the operation is idempotent. Owned tuits, likes, follows,
 * bookmarks, and messages are left in place.
 *
 * @return status:
 *             * 200 with the write acknowledgement (deleted count)
 *             * 400 if uid is not a valid object id
 */
#[delete("/api/users/<uid>")]
pub async fn delete_user(
    uid: String,
    db: &State<UserDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.delete_user(&uid).await?))
}

// Test convenience, kept off the RESTful surface's entity paths
#[delete("/api/users")]
pub async fn delete_all_users(db: &State<UserDao>) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.delete_all_users().await?))
}
