use crate::catchers::ErrorResponse;
use crate::mongo::MessageDao;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::requests::NewMessageRequest;
use tuiter_common::http::responses::WriteAck;
use tuiter_common::models::Message;

/**
 * Messages sent by one user.
 */
#[get("/api/users/<uid>/messages")]
pub async fn find_messages_from_user(
    uid: String,
    db: &State<MessageDao>,
) -> Result<Json<Vec<Message>>, ErrorResponse> {
    Ok(Json(db.find_messages_from_user(&uid).await?))
}

/**
 * Messages received by one user.
 */
#[get("/api/users/<uid>/inboxes")]
pub async fn find_messages_to_user(
    uid: String,
    db: &State<MessageDao>,
) -> Result<Json<Vec<Message>>, ErrorResponse> {
    Ok(Json(db.find_messages_to_user(&uid).await?))
}

/**
 * Messages sent from `uid` to `xuid`.
 */
#[get("/api/users/<uid>/messages/<xuid>")]
pub async fn find_messages_between(
    uid: String,
    xuid: String,
    db: &State<MessageDao>,
) -> Result<Json<Vec<Message>>, ErrorResponse> {
    Ok(Json(db.find_messages_between(&uid, &xuid).await?))
}

/**
 * Send a message from `uid` to `xuid`. The body supplies the text, the
 * path supplies both parties, and the timestamp is stamped server-side.
 *
 * @return status:
 *             * 201 with the created message
 *             * 400 if either id is malformed
 */
#[post("/api/users/<uid>/messages/<xuid>", format = "json", data = "<request>")]
pub async fn send_message(
    uid: String,
    xuid: String,
    request: Json<NewMessageRequest>,
    db: &State<MessageDao>,
) -> Result<Created<Json<Message>>, ErrorResponse> {
    let message = db
        .send_message(&uid, &xuid, request.into_inner().message)
        .await?;
    let location = message
        .id
        .map(|id| format!("/api/messages/{}", id.to_hex()))
        .unwrap_or_else(|| String::from("/api/messages"));
    Ok(Created::new(location).body(Json(message)))
}

#[put("/api/messages/<mid>", format = "json", data = "<request>")]
pub async fn update_message(
    mid: String,
    request: Json<Message>,
    db: &State<MessageDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.update_message(&mid, &request).await?))
}

#[delete("/api/messages/<mid>")]
pub async fn delete_message(
    mid: String,
    db: &State<MessageDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.delete_message(&mid).await?))
}
