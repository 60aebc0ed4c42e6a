//! SeaORM entities for the contact API: `user` owns `contact`, `contact`
//! owns `address`. Query helpers here always take the owning key so callers
//! cannot read across users by accident.

pub mod errors;
pub mod db;
pub mod user;
pub mod contact;
pub mod address;
