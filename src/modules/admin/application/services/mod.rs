pub mod token_digest;
