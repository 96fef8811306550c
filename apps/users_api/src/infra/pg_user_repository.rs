// users_api/src/infra/pg_user_repository.rs

use crate::domain::UserRepository;
use crate::errors::{AppError, Result};
use crate::models::{NewUser, Role, User, UserAvatarData, UserMapped};
use crate::validators::labels;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{event, instrument, Level};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, phone, birthdate, avatar_url, role, password, created_at, updated_at";

#[derive(Debug, FromRow)]
struct UserRow {
  id: Uuid,
  name: String,
  email: String,
  phone: String,
  birthdate: NaiveDate,
  avatar_url: String,
  role: String,
  password: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
  type Error = AppError;

  fn try_from(row: UserRow) -> Result<Self> {
    let role = row
      .role
      .parse::<Role>()
      .map_err(|e| AppError::server(format!("Stored user {} has {}", row.id, e)))?;
    Ok(User {
      id: row.id,
      name: row.name,
      email: row.email,
      phone: row.phone,
      birthdate: row.birthdate,
      avatar_url: row.avatar_url,
      role,
      password: row.password,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

pub struct PgUserRepository {
  pool: PgPool,
  default_avatar_url: String,
}

impl PgUserRepository {
  pub fn new(pool: PgPool, default_avatar_url: impl Into<String>) -> Self {
    Self {
      pool,
      default_avatar_url: default_avatar_url.into(),
    }
  }
}

#[async_trait]
impl UserRepository for PgUserRepository {
  #[instrument(name = "PgUserRepository::create", skip_all, fields(email = %new_user.email), err(Display))]
  async fn create(&self, new_user: NewUser) -> Result<()> {
    let now = Utc::now().trunc_subsecs(6);
    let inserted = sqlx::query(
      "INSERT INTO users (id, name, email, phone, birthdate, avatar_url, role, password, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(Uuid::new_v4())
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.phone)
    .bind(new_user.birthdate)
    .bind(&self.default_avatar_url)
    .bind(Role::default().as_str())
    .bind(&new_user.password)
    .bind(now)
    .bind(now)
    .execute(&self.pool)
    .await;

    match inserted {
      Ok(_) => Ok(()),
      // The unique index closes the gap between the availability check and the insert.
      Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
        event!(Level::WARN, "Insert rejected by unique email index.");
        Err(AppError::DuplicateResource(labels::EMAIL.to_string()))
      }
      Err(sqlx_error) => Err(AppError::Sqlx(sqlx_error)),
    }
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
      .bind(email)
      .fetch_optional(&self.pool)
      .await?;
    row.map(User::try_from).transpose()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<UserMapped>> {
    let row = sqlx::query_as::<_, UserRow>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    row.map(|r| User::try_from(r).map(UserMapped::from)).transpose()
  }

  async fn list(&self) -> Result<Vec<UserMapped>> {
    let rows = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {} FROM users ORDER BY created_at ASC, id ASC",
      USER_COLUMNS
    ))
    .fetch_all(&self.pool)
    .await?;
    rows
      .into_iter()
      .map(|r| User::try_from(r).map(UserMapped::from))
      .collect()
  }

  #[instrument(name = "PgUserRepository::update_avatar", skip_all, fields(user_id = %data.id), err(Display))]
  async fn update_avatar(&self, data: UserAvatarData) -> Result<()> {
    let result = sqlx::query("UPDATE users SET avatar_url = $1, updated_at = $2 WHERE id = $3")
      .bind(&data.avatar_url)
      .bind(Utc::now().trunc_subsecs(6))
      .bind(data.id)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Err(AppError::UnregisteredParam(labels::ID.to_string()));
    }
    Ok(())
  }
}
