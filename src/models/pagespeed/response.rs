use crate::models::pagespeed::audit::Audit;
use crate::models::pagespeed::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Root pub structure for the PageSpeed Insights v5 response
#[derive(Debug, Deserialize, Serialize)]
#[allow(non_snake_case)]
pub struct PagespeedResponse {
    pub lighthouseResult: Option<LighthouseResult>, // Absent when only CrUX data came back
    pub error: Option<ApiErrorBody>,
}

// Lab (synthetic) audit section of the response
#[derive(Debug, Deserialize, Serialize)]
#[allow(non_snake_case)]
pub struct LighthouseResult {
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>, // Store audit results dynamically
    pub fetchTime: Option<String>,
}

// Error payload the API attaches on quota / invalid key / bad request
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
