use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    pub position_id: i64,
    pub food_name: String,
    pub food_price: f64,
}

/// Update body for a food item. `categoryId` moves the item when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodUpdateRequest {
    #[serde(default)]
    pub category_id: Option<i32>,
    pub position_id: i64,
    pub food_name: String,
    pub food_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
    pub food_id: i32,
    pub category_id: i32,
    pub position_id: i64,
    pub food_name: String,
    pub food_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodListResponse {
    pub food_responses: Vec<FoodResponse>,
}
