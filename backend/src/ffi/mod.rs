//! Python bindings
//!
//! Tables cross the boundary as plain Python containers:
//! - recommendations: list of `{"user_id": int, "item_id": int}` dicts, in rank order
//! - demographics: `{user_id: country}`
//! - tracks: `{item_id: country}`

pub mod functions;
pub mod types;
