// users_api/src/models/mod.rs

//! Domain records exchanged between the layers.

pub mod auth;
pub mod avatar;
pub mod user;

pub use auth::{AuthResult, Identity, TokenClaims};
pub use avatar::UserAvatarData;
pub use user::{NewUser, Role, User, UserMapped};
