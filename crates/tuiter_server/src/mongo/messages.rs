use super::{parse_object_id, store_error, to_set_document, MESSAGES};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::DateTime;
use mongodb::{Collection, Database};
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::WriteAck;
use tuiter_common::models::Message;

pub struct MessageDao {
    messages: Collection<Message>,
}

impl MessageDao {
    pub fn new(db: &Database) -> Self {
        Self {
            messages: db.collection(MESSAGES),
        }
    }

    pub async fn find_messages_from_user(
        &self,
        uid: &str,
    ) -> Result<Vec<Message>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .messages
            .find(doc! { "from": oid }, None)
            .await
            .map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    pub async fn find_messages_to_user(
        &self,
        uid: &str,
    ) -> Result<Vec<Message>, TuiterServerError> {
        let oid = parse_object_id(uid)?;
        let cursor = self
            .messages
            .find(doc! { "to": oid }, None)
            .await
            .map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    /// Messages sent by `uid` to `xuid` (one direction, like the scope of
    /// the sending endpoint).
    pub async fn find_messages_between(
        &self,
        uid: &str,
        xuid: &str,
    ) -> Result<Vec<Message>, TuiterServerError> {
        let from = parse_object_id(uid)?;
        let to = parse_object_id(xuid)?;
        let cursor = self
            .messages
            .find(doc! { "from": from, "to": to }, None)
            .await
            .map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    pub async fn send_message(
        &self,
        uid: &str,
        xuid: &str,
        body: String,
    ) -> Result<Message, TuiterServerError> {
        let from = parse_object_id(uid)?;
        let to = parse_object_id(xuid)?;
        let mut message = Message {
            id: None,
            message: Some(body),
            from: Some(from),
            to: Some(to),
            sent_on: Some(DateTime::now()),
        };
        let result = self
            .messages
            .insert_one(&message, None)
            .await
            .map_err(store_error)?;
        message.id = result.inserted_id.as_object_id();
        Ok(message)
    }

    pub async fn update_message(
        &self,
        mid: &str,
        message: &Message,
    ) -> Result<WriteAck, TuiterServerError> {
        let oid = parse_object_id(mid)?;
        let set = to_set_document(message)?;
        if set.is_empty() {
            return Ok(WriteAck::updated(0, 0));
        }
        let result = self
            .messages
            .update_one(doc! { "_id": oid }, doc! { "$set": set }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::updated(result.matched_count, result.modified_count))
    }

    pub async fn delete_message(&self, mid: &str) -> Result<WriteAck, TuiterServerError> {
        let oid = parse_object_id(mid)?;
        let result = self
            .messages
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(store_error)?;
        Ok(WriteAck::deleted(result.deleted_count))
    }
}
