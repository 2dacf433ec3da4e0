mod path;
mod role_gate;

pub use self::path::{canonical_url, path_and_query};
pub use self::role_gate::{GateDecision, RoleGate, role_gate_middleware};
