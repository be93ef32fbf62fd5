// Weather-based wardrobe recommender.
// The matcher and membership operations are pure; only the handlers touch the network.

pub mod handlers;
pub mod matcher;
pub mod membership;
pub mod models;
