use shared::{
    abstract_trait::DynSessionStore,
    config::RouteTable,
    model::{LOGIN_PATH, Role, UNAUTHORIZED_PATH},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Authorized,
    Redirect(&'static str),
}

/// Page-level role check run before a dashboard page renders.
///
/// Reads the role stored in the session, not the token claim. It only keeps
/// unauthorized content from flashing; the gateway middleware is the check
/// that actually denies access.
#[derive(Clone)]
pub struct RoleGuard {
    session: DynSessionStore,
}

impl RoleGuard {
    pub fn new(session: DynSessionStore) -> Self {
        Self { session }
    }

    pub fn check(&self, allowed: &[Role]) -> GuardOutcome {
        let Some(session) = self.session.user_details() else {
            debug!("No session, redirecting to {LOGIN_PATH}");
            return GuardOutcome::Redirect(LOGIN_PATH);
        };

        match session.stored_role() {
            Some(role) if allowed.contains(&role) => GuardOutcome::Authorized,
            _ => {
                debug!("Role '{}' not in {:?}", session.role, allowed);
                GuardOutcome::Redirect(UNAUTHORIZED_PATH)
            }
        }
    }

    /// Same check with the allow-list taken from the route table the gateway
    /// enforces, so the two cannot drift apart.
    pub fn check_path(&self, path: &str, table: &RouteTable) -> GuardOutcome {
        let Some(session) = self.session.user_details() else {
            return GuardOutcome::Redirect(LOGIN_PATH);
        };

        if table.permits(path, session.stored_role()) {
            GuardOutcome::Authorized
        } else {
            GuardOutcome::Redirect(UNAUTHORIZED_PATH)
        }
    }
}
