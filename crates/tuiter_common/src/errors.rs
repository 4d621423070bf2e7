use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TuiterServerError {
    MalformedId(String),
    UsernameExists(String),
    RelationExists(String, String),
    SelfReference,
    StoreUnavailable(String),
    MongoError(String),
}

impl std::fmt::Display for TuiterServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TuiterServerError::MalformedId(id) => {
                write!(f, "`{}` is not a valid object id", id)
            }
            TuiterServerError::UsernameExists(username) => {
                write!(f, "Username {} already used by another account", username)
            }
            TuiterServerError::RelationExists(a, b) => {
                write!(f, "Relation between {} and {} already exists", a, b)
            }
            TuiterServerError::SelfReference => {
                write!(f, "Relation sender and target are the same")
            }
            TuiterServerError::StoreUnavailable(msg) => {
                write!(f, "Document store unreachable: {}", msg)
            }
            TuiterServerError::MongoError(msg) => write!(f, "Mongo error: {}", msg),
        }
    }
}

impl std::error::Error for TuiterServerError {}
