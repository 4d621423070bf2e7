mod bookmark;
mod follow;
mod like;
mod message;
mod tuit;
mod user;

pub use bookmark::Bookmark;
pub use follow::Follow;
pub use like::Like;
pub use message::Message;
pub use tuit::Tuit;
pub use user::{AccountType, MaritalStatus, User};
