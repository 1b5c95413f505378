use serde::{Deserialize, Serialize};

// pub struct for each category score (0.0 - 1.0)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for PageSpeed categories
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}
