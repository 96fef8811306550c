// users_api/src/domain/mod.rs

pub mod ports;
pub mod usecases;

pub use ports::{HashProvider, TokenProvider, UserRepository};
pub use usecases::{Authenticate, CreateUser, ListUsers, UpdateUserAvatar};
