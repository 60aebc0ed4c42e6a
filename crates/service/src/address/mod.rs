//! Address workflow, nested under a contact the caller owns.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::AddressService;
