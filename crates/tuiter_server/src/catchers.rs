use rocket::request::Request;
use tuiter_common::errors::TuiterServerError;

/// Error half of every handler's `Result`. Success bodies are plain
/// `Json<T>` (or `Created<Json<T>>`), so only failures go through here.
#[derive(Responder)]
pub enum ErrorResponse {
    #[response(status = 400)]
    BadRequest(String),
    #[response(status = 404)]
    NotFound(String),
    #[response(status = 409)]
    Conflict(String),
    #[response(status = 500)]
    InternalError(String),
    #[response(status = 503)]
    Unavailable(String),
}

impl From<TuiterServerError> for ErrorResponse {
    fn from(err: TuiterServerError) -> Self {
        match err {
            TuiterServerError::MalformedId(_) | TuiterServerError::SelfReference => {
                ErrorResponse::BadRequest(err.to_string())
            }
            TuiterServerError::UsernameExists(_) | TuiterServerError::RelationExists(_, _) => {
                ErrorResponse::Conflict(err.to_string())
            }
            TuiterServerError::StoreUnavailable(_) => ErrorResponse::Unavailable(err.to_string()),
            TuiterServerError::MongoError(_) => ErrorResponse::InternalError(err.to_string()),
        }
    }
}

pub struct ErrorMessage(pub Option<String>);

#[catch(400)]
pub fn bad_request(req: &Request) -> ErrorResponse {
    match req.local_cache(|| ErrorMessage(None)) {
        ErrorMessage(Some(msg)) => ErrorResponse::BadRequest(msg.to_string()),
        ErrorMessage(None) => {
            ErrorResponse::BadRequest("Unknown bad request error has occurred".to_string())
        }
    }
}

// Rocket reports failed Json body deserialization as 422
#[catch(422)]
pub fn unprocessable_entity(req: &Request) -> ErrorResponse {
    match req.local_cache(|| ErrorMessage(None)) {
        ErrorMessage(Some(msg)) => ErrorResponse::BadRequest(msg.to_string()),
        ErrorMessage(None) => {
            ErrorResponse::BadRequest("Request body could not be parsed".to_string())
        }
    }
}

#[catch(404)]
pub fn not_found(req: &Request) -> ErrorResponse {
    match req.local_cache(|| ErrorMessage(None)) {
        ErrorMessage(Some(msg)) => ErrorResponse::NotFound(msg.to_string()),
        ErrorMessage(None) => ErrorResponse::NotFound("Resource not found".to_string()),
    }
}

#[catch(500)]
pub fn internal_error(req: &Request) -> ErrorResponse {
    match req.local_cache(|| ErrorMessage(None)) {
        ErrorMessage(Some(msg)) => ErrorResponse::InternalError(msg.to_string()),
        ErrorMessage(None) => {
            ErrorResponse::InternalError("Unknown internal server error".to_string())
        }
    }
}
