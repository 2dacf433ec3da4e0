use crate::{errors::SessionError, model::Session};
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

pub trait SessionStoreTrait {
    fn set_user_details(&self, session: &Session) -> Result<(), SessionError>;
    fn get_user_details(&self) -> Result<Session, SessionError>;
    fn remove_user_details(&self);

    /// `Missing` and `Corrupt` both read as "not logged in".
    fn user_details(&self) -> Option<Session> {
        self.get_user_details().ok()
    }
}
