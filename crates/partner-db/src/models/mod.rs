//! Database models with SQLx `FromRow` derives

mod listing;
mod request;

pub use listing::ListingModel;
pub use request::RequestModel;
