use crate::{errors::RouteTableError, model::Role};

/// A protected path prefix and the roles allowed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    prefix: String,
    roles: Vec<Role>,
}

impl RouteRule {
    pub fn new(prefix: impl Into<String>, roles: &[Role]) -> Result<Self, RouteTableError> {
        let prefix = prefix.into();

        if !prefix.starts_with('/') {
            return Err(RouteTableError::InvalidPrefix(prefix));
        }
        if roles.is_empty() {
            return Err(RouteTableError::EmptyAllowList(prefix));
        }

        Ok(Self {
            prefix,
            roles: roles.to_vec(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    pub fn allows(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.roles.contains(&role))
    }
}

/// Static path-prefix to allow-list mapping. Paths no rule matches are
/// unprotected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn rules_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a RouteRule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(path))
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.rules_for(path).next().is_some()
    }

    /// Every matching rule must allow the role.
    pub fn permits(&self, path: &str, role: Option<Role>) -> bool {
        self.rules_for(path).all(|rule| rule.allows(role))
    }

    pub fn allowed_roles(&self, path: &str) -> Vec<Role> {
        let mut roles: Vec<Role> = Vec::new();
        for role in self.rules_for(path).flat_map(|rule| rule.roles.iter()) {
            if !roles.contains(role) {
                roles.push(*role);
            }
        }
        roles
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        let rule = |prefix: &str, roles: &[Role]| RouteRule {
            prefix: prefix.to_string(),
            roles: roles.to_vec(),
        };

        Self::new(vec![
            rule("/dashboard/Administrator", &[Role::Admin, Role::Moderator]),
            rule("/dashboard/freelancer", &[Role::Freelancer]),
            rule("/dashboard/client", &[Role::Client]),
        ])
    }
}
