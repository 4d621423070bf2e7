#[macro_use]
extern crate rocket;

use crate::catchers::{bad_request, internal_error, not_found, unprocessable_entity};
use crate::mongo::{
    BookmarkDao, FollowDao, LikeDao, MessageDao, TuitDao, UserDao,
};
use dotenv::dotenv;
use lazy_static::lazy_static;
use mongodb::Database;
use rocket::{Build, Rocket};
use tracing::info;
use tuiter_common::{DATABASE_NAME_ENV, MONGODB_URI_ENV};

mod catchers;
mod mongo;
mod routes;
#[cfg(test)]
mod tests;

lazy_static! {
    pub static ref MONGODB_URI: String = std::env::var(MONGODB_URI_ENV)
        .unwrap_or_else(|_| String::from("mongodb://localhost:27017"));
    pub static ref DATABASE_NAME: String =
        std::env::var(DATABASE_NAME_ENV).unwrap_or_else(|_| String::from("tuiter"));
}

/// Builds the rocket with one DAO per resource injected as managed state.
/// Shared between `main` and the integration tests so both serve the same
/// routes.
pub fn build_rocket(db: &Database) -> Rocket<Build> {
    rocket::build()
        .manage(UserDao::new(db))
        .manage(TuitDao::new(db))
        .manage(LikeDao::new(db))
        .manage(FollowDao::new(db))
        .manage(BookmarkDao::new(db))
        .manage(MessageDao::new(db))
        .mount("/", routes![health])
        .mount("/", routes::USER_ROUTES.clone())
        .mount("/", routes::TUIT_ROUTES.clone())
        .mount("/", routes::LIKE_ROUTES.clone())
        .mount("/", routes::FOLLOW_ROUTES.clone())
        .mount("/", routes::BOOKMARK_ROUTES.clone())
        .mount("/", routes::MESSAGE_ROUTES.clone())
        .register(
            "/",
            catchers![bad_request, unprocessable_entity, not_found, internal_error],
        )
}

#[get("/health")]
async fn health() -> &'static str {
    "OK"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();
    let db = mongo::connect().await?;
    info!(database = %&**DATABASE_NAME, "connected to mongodb");
    build_rocket(&db).launch().await?;
    Ok(())
}
