pub mod common;

mod token_expiration_and_cache;
