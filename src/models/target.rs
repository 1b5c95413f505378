use serde::{Deserialize, Serialize};

// pub struct for one page under measurement, loaded from the targets file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MeasurementTarget {
    pub url: String,
    pub label: String,
}
