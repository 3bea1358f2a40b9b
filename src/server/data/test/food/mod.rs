use crate::server::{
    data::food::FoodRepository,
    model::food::{CreateFoodParams, UpdateFoodParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id_in_category;
mod get_by_ids;
mod position_taken;
mod update;
