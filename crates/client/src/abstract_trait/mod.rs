mod auth;
mod refresh;
mod resource;

pub use self::auth::{AuthClientTrait, DynAuthClient};
pub use self::refresh::{DynRefreshBackend, RefreshBackendTrait};
pub use self::resource::{DynResourceClient, DynTrashClient, ResourceClientTrait, TrashClientTrait};
