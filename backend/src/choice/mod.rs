//! Choice models
//!
//! Each model turns one user's ranked candidate list into at most one
//! [`Acceptance`](crate::models::Acceptance):
//!
//! - **random**: uniform over the candidates
//! - **rank_based**: exponential decay over rank
//! - **country_centric**: rank decay times a per-country bias
//!
//! Users are processed sequentially in first-appearance order against a
//! single generator, so output is fully determined by the seed.

pub mod country_centric;
pub mod random;
pub mod rank_based;

pub use country_centric::CountryCentric;
pub use random::RandomChoice;
pub use rank_based::RankBased;
