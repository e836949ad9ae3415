//! Entity <-> model mappers

mod listing;
mod request;
