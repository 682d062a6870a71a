//! Domain models for the choice-model engine

pub mod acceptance;
pub mod demographics;
pub mod recommendation;
pub mod track;

// Re-exports
pub use acceptance::Acceptance;
pub use demographics::Demographics;
pub use recommendation::{CandidateList, ItemId, Recommendation, RecommendationBatch, UserId};
pub use track::TrackCatalog;
