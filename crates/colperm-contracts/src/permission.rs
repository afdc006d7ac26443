//! Permission entries and role expressions.
//!
//! A permission pairs an [`Action`] with a [`Role`]. On the wire it is the
//! service's string syntax, `action("role")`, e.g. `read("any")` or
//! `update("team:editors/owner")`.

use std::fmt;

use serde::{Serialize, Serializer};

/// An operation a permission entry grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a permission entry applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Anyone, signed in or not.
    Any,
    /// Unauthenticated visitors only.
    Guests,
    /// Any authenticated user, optionally narrowed by status (`verified`, `unverified`).
    Users { status: Option<String> },
    /// One specific user.
    User { id: String, status: Option<String> },
    /// Members of a team, optionally only those holding `role` in it.
    Team { id: String, role: Option<String> },
    /// One specific team membership.
    Member { id: String },
    /// Users carrying a label.
    Label { name: String },
}

impl Role {
    /// Any authenticated user.
    pub fn users() -> Self {
        Role::Users { status: None }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Role::User {
            id: id.into(),
            status: None,
        }
    }

    pub fn team(id: impl Into<String>) -> Self {
        Role::Team {
            id: id.into(),
            role: None,
        }
    }

    pub fn team_role(id: impl Into<String>, role: impl Into<String>) -> Self {
        Role::Team {
            id: id.into(),
            role: Some(role.into()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => f.write_str("any"),
            Role::Guests => f.write_str("guests"),
            Role::Users { status: None } => f.write_str("users"),
            Role::Users { status: Some(s) } => write!(f, "users/{s}"),
            Role::User { id, status: None } => write!(f, "user:{id}"),
            Role::User {
                id,
                status: Some(s),
            } => write!(f, "user:{id}/{s}"),
            Role::Team { id, role: None } => write!(f, "team:{id}"),
            Role::Team { id, role: Some(r) } => write!(f, "team:{id}/{r}"),
            Role::Member { id } => write!(f, "member:{id}"),
            Role::Label { name } => write!(f, "label:{name}"),
        }
    }
}

/// One (action, role) entry of a collection's permission set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission {
    pub action: Action,
    pub role: Role,
}

impl Permission {
    pub fn new(action: Action, role: Role) -> Self {
        Self { action, role }
    }

    pub fn create(role: Role) -> Self {
        Self::new(Action::Create, role)
    }

    pub fn read(role: Role) -> Self {
        Self::new(Action::Read, role)
    }

    pub fn update(role: Role) -> Self {
        Self::new(Action::Update, role)
    }

    pub fn delete(role: Role) -> Self {
        Self::new(Action::Delete, role)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.action, self.role)
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_expressions_render_in_wire_syntax() {
        let cases = [
            (Role::Any, "any"),
            (Role::Guests, "guests"),
            (Role::users(), "users"),
            (
                Role::Users {
                    status: Some("verified".into()),
                },
                "users/verified",
            ),
            (Role::user("u1"), "user:u1"),
            (
                Role::User {
                    id: "u1".into(),
                    status: Some("unverified".into()),
                },
                "user:u1/unverified",
            ),
            (Role::team("editors"), "team:editors"),
            (Role::team_role("editors", "owner"), "team:editors/owner"),
            (Role::Member { id: "m9".into() }, "member:m9"),
            (Role::Label { name: "vip".into() }, "label:vip"),
        ];

        for (role, expected) in cases {
            assert_eq!(role.to_string(), expected);
        }
    }

    #[test]
    fn permission_renders_action_and_quoted_role() {
        assert_eq!(Permission::read(Role::Any).to_string(), r#"read("any")"#);
        assert_eq!(
            Permission::delete(Role::team_role("t", "admin")).to_string(),
            r#"delete("team:t/admin")"#
        );
    }

    #[test]
    fn permission_serializes_as_string() {
        let json = serde_json::to_value(vec![
            Permission::create(Role::users()),
            Permission::read(Role::Guests),
        ])
        .unwrap();

        assert_eq!(json, serde_json::json!([r#"create("users")"#, r#"read("guests")"#]));
    }
}
