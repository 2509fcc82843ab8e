use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub category_id: Option<i32>,
    pub ranking: Option<i32>,
}
