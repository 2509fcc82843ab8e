use serde::{Deserialize, Serialize};

use crate::models::StoreText;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: StoreText,
}
