use crate::catchers::ErrorResponse;
use crate::mongo::TuitDao;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::requests::NewTuitRequest;
use tuiter_common::http::responses::{TuitWithAuthor, WriteAck};
use tuiter_common::models::Tuit;

#[get("/api/tuits")]
pub async fn find_all_tuits(db: &State<TuitDao>) -> Result<Json<Vec<Tuit>>, ErrorResponse> {
    Ok(Json(db.find_all_tuits().await?))
}

/**
 * Tuits posted by one user. An unknown uid scopes to nothing and returns
 * an empty array, never an error.
 */
#[get("/api/users/<uid>/tuits")]
pub async fn find_tuits_by_user(
    uid: String,
    db: &State<TuitDao>,
) -> Result<Json<Vec<Tuit>>, ErrorResponse> {
    Ok(Json(db.find_tuits_by_user(&uid).await?))
}

/**
 * Single tuit with its author populated.
 *
 * @return status:
 *             * 200 with the tuit, author embedded under postedBy
 *             * 400 if tid is not a valid object id
 *             * 404 if no tuit matches
 */
#[get("/api/tuits/<tid>")]
pub async fn find_tuit_by_id(
    tid: String,
    db: &State<TuitDao>,
) -> Result<Json<TuitWithAuthor>, ErrorResponse> {
    match db.find_tuit_by_id(&tid).await? {
        Some(tuit) => Ok(Json(tuit)),
        None => Err(ErrorResponse::NotFound(format!(
            "Tuit {} does not exist",
            tid
        ))),
    }
}

/**
 * Create a tuit. The posting timestamp is stamped server-side.
 *
 * @return status:
 *             * 201 with the created tuit
 *             * 400 if postedBy is not a valid object id
 */
#[post("/api/tuits", format = "json", data = "<request>")]
pub async fn create_tuit(
    request: Json<NewTuitRequest>,
    db: &State<TuitDao>,
) -> Result<Created<Json<Tuit>>, ErrorResponse> {
    let tuit = db.create_tuit(request.into_inner()).await?;
    let location = tuit
        .id
        .map(|id| format!("/api/tuits/{}", id.to_hex()))
        .unwrap_or_else(|| String::from("/api/tuits"));
    Ok(Created::new(location).body(Json(tuit)))
}

#[put("/api/tuits/<tid>", format = "json", data = "<request>")]
pub async fn update_tuit(
    tid: String,
    request: Json<Tuit>,
    db: &State<TuitDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.update_tuit(&tid, &request).await?))
}

#[delete("/api/tuits/<tid>")]
pub async fn delete_tuit(
    tid: String,
    db: &State<TuitDao>,
) -> Result<Json<WriteAck>, ErrorResponse> {
    Ok(Json(db.delete_tuit(&tid).await?))
}
