//! Session state: the persisted token slot and the auth store over it

mod auth;
mod token_store;

pub use auth::AuthStore;
pub use token_store::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};
