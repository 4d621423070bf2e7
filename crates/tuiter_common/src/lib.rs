pub mod errors;
pub mod http;
pub mod models;

/// Name of the env var holding the MongoDB connection string.
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// Name of the env var holding the database name.
pub const DATABASE_NAME_ENV: &str = "DATABASE_NAME";
