use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize)]
#[allow(non_snake_case)]
pub struct Audit {
    pub numericValue: Option<f64>,
    pub displayValue: Option<String>,
}
