mod client;
mod models;
mod provider_error;

pub use client::RateProvider;
pub use models::{Offer, OfferDetails};
pub use provider_error::ProviderError;
