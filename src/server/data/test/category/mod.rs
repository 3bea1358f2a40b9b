use crate::server::{
    data::category::CategoryRepository,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod position_taken;
mod update;
