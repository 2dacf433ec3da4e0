use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("Route prefix '{0}' has an empty allow-list")]
    EmptyAllowList(String),

    #[error("Route prefix '{0}' must start with '/'")]
    InvalidPrefix(String),
}
