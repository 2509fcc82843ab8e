use serde::{Deserialize, Serialize};

use crate::models::StoreText;

// Fields are not type-checked here: each one reaches the store as text and
// the statement casts it, so an absent key is NULL and "1" works like 1.

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub name: StoreText,
    #[serde(default)]
    pub description: StoreText,
    #[serde(default)]
    pub author: StoreText,
    #[serde(default)]
    pub category_id: StoreText,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub name: StoreText,
    #[serde(default)]
    pub description: StoreText,
    #[serde(default)]
    pub author: StoreText,
    #[serde(default)]
    pub ranking: StoreText,
}

/// Signed delta added to the current ranking.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AdjustRankingRequest {
    #[serde(default)]
    pub points: StoreText,
}
