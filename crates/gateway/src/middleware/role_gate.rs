use crate::{
    metrics::{Decision, GateMetrics},
    middleware::canonical_url,
};
use axum::{
    Extension,
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    config::{RouteTable, SessionCookie},
    errors::SessionError,
    model::{LOGIN_PATH, Role, UNAUTHORIZED_PATH},
    utils::decode_claims,
};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Login,
    Unauthorized,
    Landing(&'static str),
}

impl GateDecision {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GateDecision::Allow => None,
            GateDecision::Login => Some(LOGIN_PATH),
            GateDecision::Unauthorized => Some(UNAUTHORIZED_PATH),
            GateDecision::Landing(path) => Some(path),
        }
    }

    fn metric(&self) -> Decision {
        match self {
            GateDecision::Allow => Decision::Allow,
            GateDecision::Login => Decision::Login,
            GateDecision::Unauthorized => Decision::Unauthorized,
            GateDecision::Landing(_) => Decision::Landing,
        }
    }
}

/// Navigation-time role check against the session cookie.
///
/// The role comes from the access token's payload, decoded without
/// verifying the signature or expiry. Backends still verify every token
/// they receive; this gate only decides which pages to serve.
#[derive(Debug, Clone, Default)]
pub struct RoleGate {
    cookie: SessionCookie,
    routes: RouteTable,
    metrics: GateMetrics,
}

impl RoleGate {
    pub fn new(cookie: SessionCookie, routes: RouteTable) -> Self {
        Self {
            cookie,
            routes,
            metrics: GateMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &GateMetrics {
        &self.metrics
    }

    pub fn evaluate(&self, path: &str, jar: &CookieJar) -> GateDecision {
        let session = match self.cookie.read(jar) {
            Ok(session) => session,
            Err(SessionError::Missing) => {
                debug!(path, "No session cookie");
                return GateDecision::Login;
            }
            Err(e) => {
                warn!(path, "Rejecting unreadable session cookie: {e}");
                return GateDecision::Login;
            }
        };

        let Some(token) = session.access_token() else {
            debug!(path, "Session has no access token");
            return GateDecision::Login;
        };

        let role = match decode_claims(token) {
            Ok(claims) => claims.role.and_then(|role| role.parse::<Role>().ok()),
            Err(e) => {
                warn!(path, "Access token payload unreadable: {e}");
                return GateDecision::Login;
            }
        };

        if let Some(rule) = self.routes.rules_for(path).find(|rule| !rule.allows(role)) {
            debug!(path, ?role, prefix = rule.prefix(), "Role not allowed");
            return GateDecision::Unauthorized;
        }

        if path == "/" {
            return match role {
                Some(role) => GateDecision::Landing(role.landing_path()),
                None => GateDecision::Unauthorized,
            };
        }

        GateDecision::Allow
    }
}

pub async fn role_gate_middleware(
    Extension(gate): Extension<Arc<RoleGate>>,
    jar: CookieJar,
    req: Request<Body>,
    next: Next,
) -> Response {
    let decision = match canonical_url(req.uri()) {
        Some(url) => gate.evaluate(url.path(), &jar),
        None => {
            warn!("Rejecting request target {}", req.uri());
            GateDecision::Login
        }
    };
    gate.metrics.record(decision.metric());

    match decision.redirect_target() {
        None => next.run(req).await,
        Some(target) => Redirect::temporary(target).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;
    use shared::{config::SESSION_COOKIE_NAME, model::Session};

    fn jar_for(role: &str, access_token: Option<String>) -> CookieJar {
        let access_token = access_token.unwrap_or_else(|| {
            encode(
                &Header::default(),
                &json!({"role": role, "exp": 1}),
                &EncodingKey::from_secret(b"k"),
            )
            .unwrap()
        });

        let session = Session {
            uid: "1".into(),
            username: "u".into(),
            role: role.into(),
            access_token,
            refresh_token: "r".into(),
            token_data: None,
        };
        CookieJar::new().add(SessionCookie::default().seal(&session).unwrap())
    }

    #[test]
    fn no_cookie_goes_to_login() {
        let gate = RoleGate::default();
        assert_eq!(gate.evaluate("/dashboard/client", &CookieJar::new()), GateDecision::Login);
    }

    #[test]
    fn corrupt_cookie_goes_to_login() {
        let gate = RoleGate::default();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE_NAME, "tampered"));
        assert_eq!(gate.evaluate("/dashboard/client", &jar), GateDecision::Login);
    }

    #[test]
    fn missing_or_garbled_access_token_goes_to_login() {
        let gate = RoleGate::default();

        let empty = jar_for("CLIENT", Some(String::new()));
        assert_eq!(gate.evaluate("/dashboard/client", &empty), GateDecision::Login);

        let garbled = jar_for("CLIENT", Some("x.y.z".into()));
        assert_eq!(gate.evaluate("/dashboard/client", &garbled), GateDecision::Login);
    }

    #[test]
    fn wrong_role_is_unauthorized() {
        let gate = RoleGate::default();
        let jar = jar_for("FREELANCER", None);

        assert_eq!(
            gate.evaluate("/dashboard/Administrator/blogs", &jar),
            GateDecision::Unauthorized
        );
    }

    #[test]
    fn matching_role_is_allowed_even_with_expired_token() {
        let gate = RoleGate::default();
        let jar = jar_for("FREELANCER", None);

        assert_eq!(
            gate.evaluate("/dashboard/freelancer/projects", &jar),
            GateDecision::Allow
        );
    }

    #[test]
    fn root_redirects_to_role_landing() {
        let gate = RoleGate::default();

        assert_eq!(
            gate.evaluate("/", &jar_for("CLIENT", None)),
            GateDecision::Landing("/dashboard/client")
        );
        assert_eq!(
            gate.evaluate("/", &jar_for("MODERATOR", None)),
            GateDecision::Landing("/dashboard/Administrator")
        );
        assert_eq!(
            gate.evaluate("/", &jar_for("GUEST", None)),
            GateDecision::Unauthorized
        );
    }

    #[test]
    fn role_claim_wins_over_stored_role() {
        let gate = RoleGate::default();
        let token = encode(
            &Header::default(),
            &json!({"role": "CLIENT"}),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap();
        let jar = jar_for("ADMIN", Some(token));

        assert_eq!(
            gate.evaluate("/dashboard/Administrator", &jar),
            GateDecision::Unauthorized
        );
    }

    #[test]
    fn unprotected_paths_pass_with_a_session() {
        let gate = RoleGate::default();
        assert_eq!(
            gate.evaluate("/dashboard", &jar_for("CLIENT", None)),
            GateDecision::Allow
        );
    }
}
