//! End-to-end tests against the full rocket. Tests marked `#[ignore]` need
//! a reachable MongoDB at `MONGODB_URI` and share one database, so run them
//! with `cargo test -- --ignored --test-threads=1`.

use crate::{build_rocket, mongo, DATABASE_NAME};
use mongodb::bson::oid::ObjectId;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

struct TuiterTestContext {
    client: Client,
}

impl TuiterTestContext {
    /// Rocket over the configured database. Building the client does not
    /// contact the store, so parse-level tests run without one.
    async fn init() -> Self {
        let db = mongo::connect().await.unwrap();
        TuiterTestContext {
            client: Client::tracked(build_rocket(&db)).await.unwrap(),
        }
    }

    /// Same, but over a freshly dropped database.
    async fn init_clean() -> Self {
        mongo::drop_database(&DATABASE_NAME).await.unwrap();
        Self::init().await
    }

    async fn get(&self, path: &str) -> (Status, Value) {
        let response = self.client.get(path).dispatch().await;
        let status = response.status();
        let body = response.into_string().await.unwrap_or_default();
        (status, serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    async fn post_json(&self, path: &str, body: Value) -> (Status, Value) {
        let response = self
            .client
            .post(path)
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        let status = response.status();
        let body = response.into_string().await.unwrap_or_default();
        (status, serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    async fn put_json(&self, path: &str, body: Value) -> (Status, Value) {
        let response = self
            .client
            .put(path)
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        let status = response.status();
        let body = response.into_string().await.unwrap_or_default();
        (status, serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    async fn delete(&self, path: &str) -> (Status, Value) {
        let response = self.client.delete(path).dispatch().await;
        let status = response.status();
        let body = response.into_string().await.unwrap_or_default();
        (status, serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    async fn create_user(&self, username: &str) -> Value {
        let (status, body) = self
            .post_json(
                "/api/users",
                json!({
                    "username": username,
                    "email": format!("{}@tuiter.com", username),
                }),
            )
            .await;
        assert_eq!(status, Status::Created);
        body
    }
}

fn oid_of(value: &Value) -> String {
    value["_id"]["$oid"].as_str().unwrap().to_string()
}

#[rocket::async_test]
async fn health_check() {
    let ctx = TuiterTestContext::init().await;
    let response = ctx.client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "OK");
}

#[rocket::async_test]
async fn malformed_id_is_rejected_before_the_store() {
    let ctx = TuiterTestContext::init().await;
    let (status, _) = ctx.get("/api/users/not-a-hex-id").await;
    assert_eq!(status, Status::BadRequest);
    let (status, _) = ctx.get("/api/tuits/not-a-hex-id").await;
    assert_eq!(status, Status::BadRequest);
    let response = ctx
        .client
        .post("/api/users/abc/follows/def")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn self_follow_is_rejected() {
    let ctx = TuiterTestContext::init().await;
    let uid = ObjectId::new().to_hex();
    let response = ctx
        .client
        .post(format!("/api/users/{}/follows/{}", uid, uid))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn unknown_route_is_a_404() {
    let ctx = TuiterTestContext::init().await;
    let response = ctx.client.get("/api/nonsense").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn user_crud_roundtrip() {
    let ctx = TuiterTestContext::init_clean().await;

    let created = ctx.create_user("alice").await;
    assert_eq!(created["username"], "alice");
    assert_eq!(created["email"], "alice@tuiter.com");
    let uid = oid_of(&created);

    // create followed by find returns the same fields
    let (status, fetched) = ctx.get(&format!("/api/users/{}", uid)).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(fetched["username"], "alice");
    assert_eq!(fetched["email"], "alice@tuiter.com");

    // partial update touches only the named field
    let (status, ack) = ctx
        .put_json(
            &format!("/api/users/{}", uid),
            json!({ "email": "new@tuiter.com" }),
        )
        .await;
    assert_eq!(status, Status::Ok);
    assert_eq!(ack["matchedCount"], 1);
    let (_, after) = ctx.get(&format!("/api/users/{}", uid)).await;
    assert_eq!(after["email"], "new@tuiter.com");
    assert_eq!(after["username"], "alice");

    // delete acks one, then the user is gone and a second delete acks zero
    let (status, ack) = ctx.delete(&format!("/api/users/{}", uid)).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(ack["deletedCount"], 1);
    let (status, _) = ctx.get(&format!("/api/users/{}", uid)).await;
    assert_eq!(status, Status::NotFound);
    let (_, ack) = ctx.delete(&format!("/api/users/{}", uid)).await;
    assert_eq!(ack["deletedCount"], 0);
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn duplicate_username_conflicts() {
    let ctx = TuiterTestContext::init_clean().await;
    ctx.create_user("alice").await;
    let (status, _) = ctx
        .post_json("/api/users", json!({ "username": "alice" }))
        .await;
    assert_eq!(status, Status::Conflict);
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn tuit_create_and_populate() {
    let ctx = TuiterTestContext::init_clean().await;
    let author = ctx.create_user("alice").await;
    let uid = oid_of(&author);

    let (status, tuit) = ctx
        .post_json(
            "/api/tuits",
            json!({ "tuit": "hello tuiter", "postedBy": uid }),
        )
        .await;
    assert_eq!(status, Status::Created);
    let tid = oid_of(&tuit);

    // single read resolves the author reference
    let (status, populated) = ctx.get(&format!("/api/tuits/{}", tid)).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(populated["tuit"], "hello tuiter");
    assert_eq!(populated["postedBy"]["username"], "alice");

    // scoped list shows the tuit without populating
    let (_, list) = ctx.get(&format!("/api/users/{}/tuits", uid)).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // deleting the author orphans the tuit; the populate read leaves the
    // reference unresolved instead of failing
    ctx.delete(&format!("/api/users/{}", uid)).await;
    let (status, orphaned) = ctx.get(&format!("/api/tuits/{}", tid)).await;
    assert_eq!(status, Status::Ok);
    assert!(orphaned["postedBy"].is_null());
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn follow_is_visible_from_both_sides() {
    let ctx = TuiterTestContext::init_clean().await;
    let u1 = oid_of(&ctx.create_user("alice").await);
    let u2 = oid_of(&ctx.create_user("bob").await);

    let (status, _) = ctx
        .post_json(&format!("/api/users/{}/follows/{}", u1, u2), json!({}))
        .await;
    assert_eq!(status, Status::Created);

    let (_, follows) = ctx.get(&format!("/api/users/{}/follows", u1)).await;
    let follows = follows.as_array().unwrap();
    assert_eq!(follows.len(), 1);
    assert_eq!(follows[0]["userFollowedBy"]["username"], "bob");

    let (_, followers) = ctx.get(&format!("/api/users/{}/followedby", u2)).await;
    let followers = followers.as_array().unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0]["userFollowing"]["username"], "alice");

    // second follow of the same pair conflicts
    let (status, _) = ctx
        .post_json(&format!("/api/users/{}/follows/{}", u1, u2), json!({}))
        .await;
    assert_eq!(status, Status::Conflict);

    // unfollow removes the relation from both lists
    let (_, ack) = ctx
        .delete(&format!("/api/users/{}/follows/{}", u1, u2))
        .await;
    assert_eq!(ack["deletedCount"], 1);
    let (_, follows) = ctx.get(&format!("/api/users/{}/follows", u1)).await;
    assert!(follows.as_array().unwrap().is_empty());
    let (_, followers) = ctx.get(&format!("/api/users/{}/followedby", u2)).await;
    assert!(followers.as_array().unwrap().is_empty());
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn like_and_bookmark_relations() {
    let ctx = TuiterTestContext::init_clean().await;
    let uid = oid_of(&ctx.create_user("alice").await);
    let (_, tuit) = ctx
        .post_json("/api/tuits", json!({ "tuit": "likeable", "postedBy": uid }))
        .await;
    let tid = oid_of(&tuit);

    let (status, _) = ctx
        .post_json(&format!("/api/users/{}/likes/{}", uid, tid), json!({}))
        .await;
    assert_eq!(status, Status::Created);
    let (status, _) = ctx
        .post_json(&format!("/api/users/{}/likes/{}", uid, tid), json!({}))
        .await;
    assert_eq!(status, Status::Conflict);

    let (_, liked) = ctx.get(&format!("/api/users/{}/likes", uid)).await;
    assert_eq!(liked[0]["tuit"]["tuit"], "likeable");
    let (_, likers) = ctx.get(&format!("/api/tuits/{}/likes", tid)).await;
    assert_eq!(likers[0]["likedBy"]["username"], "alice");

    let (status, _) = ctx
        .post_json(&format!("/api/users/{}/bookmarks/{}", uid, tid), json!({}))
        .await;
    assert_eq!(status, Status::Created);
    let (_, bookmarks) = ctx.get(&format!("/api/users/{}/bookmarks", uid)).await;
    assert_eq!(bookmarks[0]["bookmarkedTuit"]["tuit"], "likeable");

    let (_, ack) = ctx.delete(&format!("/api/users/{}/likes/{}", uid, tid)).await;
    assert_eq!(ack["deletedCount"], 1);
    let (_, ack) = ctx
        .delete(&format!("/api/users/{}/bookmarks/{}", uid, tid))
        .await;
    assert_eq!(ack["deletedCount"], 1);
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn message_flow() {
    let ctx = TuiterTestContext::init_clean().await;
    let u1 = oid_of(&ctx.create_user("alice").await);
    let u2 = oid_of(&ctx.create_user("bob").await);

    let (status, message) = ctx
        .post_json(
            &format!("/api/users/{}/messages/{}", u1, u2),
            json!({ "message": "hi bob" }),
        )
        .await;
    assert_eq!(status, Status::Created);
    let mid = oid_of(&message);

    let (_, sent) = ctx.get(&format!("/api/users/{}/messages", u1)).await;
    assert_eq!(sent.as_array().unwrap().len(), 1);
    let (_, inbox) = ctx.get(&format!("/api/users/{}/inboxes", u2)).await;
    assert_eq!(inbox.as_array().unwrap().len(), 1);
    let (_, between) = ctx
        .get(&format!("/api/users/{}/messages/{}", u1, u2))
        .await;
    assert_eq!(between[0]["message"], "hi bob");

    let (_, ack) = ctx
        .put_json(
            &format!("/api/messages/{}", mid),
            json!({ "message": "edited" }),
        )
        .await;
    assert_eq!(ack["matchedCount"], 1);
    let (_, between) = ctx
        .get(&format!("/api/users/{}/messages/{}", u1, u2))
        .await;
    assert_eq!(between[0]["message"], "edited");

    let (_, ack) = ctx.delete(&format!("/api/messages/{}", mid)).await;
    assert_eq!(ack["deletedCount"], 1);
}

#[rocket::async_test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn scoped_lists_on_unknown_ids_are_empty() {
    let ctx = TuiterTestContext::init_clean().await;
    let ghost = ObjectId::new().to_hex();
    for path in [
        format!("/api/users/{}/tuits", ghost),
        format!("/api/users/{}/likes", ghost),
        format!("/api/users/{}/follows", ghost),
        format!("/api/users/{}/followedby", ghost),
        format!("/api/users/{}/bookmarks", ghost),
        format!("/api/users/{}/messages", ghost),
        format!("/api/users/{}/inboxes", ghost),
        format!("/api/tuits/{}/likes", ghost),
        format!("/api/tuits/{}/bookmarks", ghost),
    ] {
        let (status, body) = ctx.get(&path).await;
        assert_eq!(status, Status::Ok, "{} should be an empty 200", path);
        assert!(body.as_array().unwrap().is_empty(), "{} not empty", path);
    }
}
