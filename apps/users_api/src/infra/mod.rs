// users_api/src/infra/mod.rs

//! Concrete adapters behind the `crate::domain` ports.

pub mod argon2_hash_provider;
pub mod jwt_token_provider;
pub mod memory_user_repository;
pub mod pg_user_repository;

pub use argon2_hash_provider::Argon2HashProvider;
pub use jwt_token_provider::JwtTokenProvider;
pub use memory_user_repository::MemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
