//! Core module - date keys, the anniversary sequence and digest assembly

mod anniversary;
mod digest;
mod types;

pub(crate) use anniversary::years_ago;
pub(crate) use digest::build_digest;
pub(crate) use types::{Digest, ObservationDate};
