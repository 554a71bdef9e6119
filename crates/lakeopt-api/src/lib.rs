mod error;
pub use error::ApiError;

mod handler;
pub use handler::ApiHandler;

mod service;
pub use service::OptimizationService;

mod http;
pub use http::HttpApi;

pub use axum;
