use crate::server::data::revoked_token::RevokedTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod purge_expired;
mod revoke;
