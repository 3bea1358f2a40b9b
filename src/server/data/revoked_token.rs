//! Revoked bearer token storage.
//!
//! Logout records the token here until its own expiry; after that the JWT expiry
//! check rejects it anyway and the row is purged.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct RevokedTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevokedTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a token as revoked. Revoking the same token twice is a no-op.
    ///
    /// # Arguments
    /// - `token` - Raw JWT without the bearer prefix
    /// - `expires_at` - The token's own `exp`, after which the row may be purged
    pub async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), DbErr> {
        let result = entity::prelude::RevokedToken::insert(entity::revoked_token::ActiveModel {
            token: sea_orm::ActiveValue::Set(token.to_string()),
            expires_at: sea_orm::ActiveValue::Set(expires_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::revoked_token::Column::Token)
                .do_nothing()
                .to_owned(),
        )
        .exec(self.db)
        .await;

        match result {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(err) => Err(err),
        }
    }

    pub async fn is_revoked(&self, token: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RevokedToken::find()
            .filter(entity::revoked_token::Column::Token.eq(token))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes every row whose token expired before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RevokedToken::delete_many()
            .filter(entity::revoked_token::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
