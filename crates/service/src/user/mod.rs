//! User workflow: registration, login, profile and logout.
//!
//! Login issues a random session token stored on the user row; the HTTP
//! layer resolves it back to a [`domain::CurrentUser`] through
//! [`service::UserService::authenticate`].

pub mod domain;
pub mod repository;
pub mod service;

pub use service::UserService;
