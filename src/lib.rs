//! deckgen: an HTTP service that generates, edits and exports slide
//! presentations. Decks come from a chat-completions model (or an offline
//! outline when none is configured), live in an in-memory registry, and
//! are persisted to local disk with an optional S3-compatible mirror.

pub mod config;
pub mod errors;
pub mod export;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod rate_limit;
pub mod storage;
pub mod store;
pub mod validate;
