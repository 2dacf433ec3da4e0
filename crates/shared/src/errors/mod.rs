mod api;
mod error;
mod http;
mod refresh;
mod routes;
mod session;
mod token;

pub use self::api::ApiError;
pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::refresh::RefreshError;
pub use self::routes::RouteTableError;
pub use self::session::SessionError;
pub use self::token::TokenError;
