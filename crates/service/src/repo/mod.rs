pub mod seaorm;

pub use seaorm::{SeaOrmAddressRepository, SeaOrmContactRepository, SeaOrmUserRepository};
