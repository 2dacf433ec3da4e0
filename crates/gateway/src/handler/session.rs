use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use shared::model::LOGIN_PATH;
use std::sync::Arc;
use tracing::info;

pub async fn unauthorized_handler() -> Redirect {
    Redirect::temporary(LOGIN_PATH)
}

pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> impl IntoResponse {
    info!("Clearing session cookie");
    let jar = jar.remove(state.session_cookie.removal());
    (jar, Redirect::temporary(LOGIN_PATH))
}
