mod session;

pub use self::session::CookieSessionStore;
