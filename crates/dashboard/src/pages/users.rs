// File: crates/dashboard/src/pages/users.rs
// Summary: Users page: user table, add-user form and display-only role permissions.

use chrono::TimeDelta;
use tracing::{debug, warn};

use crate::format::relative_age;
use crate::store::Reducer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Manager,
    Technician,
    #[default]
    Monitor,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Administrator, Role::Manager, Role::Technician, Role::Monitor];

    pub fn label(self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Manager => "Manager",
            Role::Technician => "Technician",
            Role::Monitor => "Monitor",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    /// `(granted, permission)` rows of the permissions card.
    pub fn permissions(self) -> &'static [(bool, &'static str)] {
        match self {
            Role::Administrator => &[
                (true, "Full system access"),
                (true, "Manage users"),
                (true, "System configuration"),
                (true, "View all reports"),
            ],
            Role::Manager => &[
                (true, "View all data"),
                (true, "Create reports"),
                (true, "Manage alerts"),
                (false, "System configuration"),
            ],
            Role::Technician => &[
                (true, "View zone data"),
                (true, "Report issues"),
                (true, "Update maintenance"),
                (false, "Manage users"),
            ],
            Role::Monitor => &[
                (true, "View alerts"),
                (true, "Read-only access"),
                (false, "Modify settings"),
                (false, "Manage users"),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            UserStatus::Active => "status-badge active",
            UserStatus::Inactive => "status-badge inactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: TimeDelta,
}

impl User {
    /// Avatar letter.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn last_login_label(&self) -> String {
        relative_age(self.last_login)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Email(String),
    Role(Role),
}

/// Activity log card: (time, actor, detail).
pub const ACTIVITY_LOG: [(&str, &str, &str); 4] = [
    ("2:45 PM", "John Admin", "Generated monthly report"),
    ("1:30 PM", "Sarah Manager", "Acknowledged system alert"),
    ("12:15 PM", "Mike Technician", "Updated maintenance schedule"),
    ("11:00 AM", "System", "Automatic backup completed"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct UsersState {
    pub users: Vec<User>,
    pub form_open: bool,
    pub draft: UserDraft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsersAction {
    ToggleForm,
    CancelForm,
    EditDraft(DraftField),
    Add,
    Delete(u32),
}

impl UsersState {
    pub fn seed() -> Self {
        let user = |id, name: &str, email: &str, role, status, last_login| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            last_login,
        };
        Self {
            users: vec![
                user(1, "John Admin", "john.admin@watermanagement.com", Role::Administrator, UserStatus::Active, TimeDelta::hours(2)),
                user(2, "Sarah Manager", "sarah.manager@watermanagement.com", Role::Manager, UserStatus::Active, TimeDelta::days(1)),
                user(3, "Mike Technician", "mike.tech@watermanagement.com", Role::Technician, UserStatus::Active, TimeDelta::hours(3)),
                user(4, "Emily Monitor", "emily.monitor@watermanagement.com", Role::Monitor, UserStatus::Inactive, TimeDelta::weeks(1)),
            ],
            form_open: false,
            draft: UserDraft::default(),
        }
    }

    /// Ids stay unique after deletions.
    pub fn next_id(&self) -> u32 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }
}

impl Reducer for UsersState {
    type Action = UsersAction;

    fn reduce(&self, action: UsersAction) -> Self {
        let mut next = self.clone();
        match action {
            UsersAction::ToggleForm => next.form_open = !next.form_open,
            UsersAction::CancelForm => next.form_open = false,
            UsersAction::EditDraft(field) => match field {
                DraftField::Name(v) => next.draft.name = v,
                DraftField::Email(v) => next.draft.email = v,
                DraftField::Role(r) => next.draft.role = r,
            },
            UsersAction::Add => {
                let name = next.draft.name.trim();
                let email = next.draft.email.trim();
                if name.is_empty() || email.is_empty() {
                    warn!("add user: name and email are required");
                    return next;
                }
                let user = User {
                    id: self.next_id(),
                    name: name.to_string(),
                    email: email.to_string(),
                    role: next.draft.role,
                    status: UserStatus::Active,
                    last_login: TimeDelta::zero(),
                };
                debug!(id = user.id, name = %user.name, "user added");
                next.users.push(user);
                next.draft = UserDraft::default();
                next.form_open = false;
            }
            UsersAction::Delete(id) => {
                next.users.retain(|u| u.id != id);
                if next.users.len() == self.users.len() {
                    warn!(id, "delete: no such user");
                }
            }
        }
        next
    }
}
