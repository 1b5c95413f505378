pub mod response;
pub mod category;
pub mod audit;

pub use response::{PagespeedResponse, LighthouseResult, ApiErrorBody};
pub use category::{Category, Categories};
pub use audit::Audit;
