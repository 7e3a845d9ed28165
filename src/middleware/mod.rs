pub mod auth;
pub mod response;
pub mod validate_store;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use response::{ApiResponse, ApiResult};
pub use validate_store::{validate_store_middleware, CurrentStore};
