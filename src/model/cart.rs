use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub food_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    pub items: Vec<CartItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub food_id: i32,
    pub food_name: String,
    /// Unit price at the time of reading.
    pub food_price: f64,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: i32,
    pub user_id: i32,
    pub items: Vec<CartItemResponse>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartListResponse {
    pub cart_responses: Vec<CartResponse>,
}
