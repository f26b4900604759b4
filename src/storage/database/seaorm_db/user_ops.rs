use crate::core::models::User;
use crate::utils::error::{GatewayError, Result};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

const LIKE_ESCAPE: char = '\\';

/// `%term%` with LIKE wildcards in `term` matched literally
fn contains_pattern(term: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(user_model.map(|model| model.to_domain()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(user_model.map(|model| model.to_domain()))
    }

    /// Create a new user
    ///
    /// A duplicate email surfaces as `Conflict` even when two signups race
    /// past the pre-check.
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain(user);

        entities::User::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    GatewayError::conflict("User already exists")
                }
                _ => GatewayError::Database(e),
            })?;

        Ok(user.clone())
    }

    /// Count all users
    pub async fn count_users(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)
    }

    /// Page through users, newest first, optionally matching `search`
    /// against name or email case-insensitively
    pub async fn list_users(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<User>, u64)> {
        debug!("Listing users: search={:?} offset={} limit={}", search, offset, limit);

        let mut query = entities::User::find();
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = contains_pattern(&term.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(user::Column::Name))).like(pattern.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(user::Column::Email))).like(pattern)),
            );
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        let users = query
            .order_by_desc(user::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok((users.iter().map(user::Model::to_domain).collect(), total))
    }
}
