//! Admin panel roles.
//!
//! The names must match the CHECK constraint on `admin_users.role`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// Role carried in an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    Admin,
    Editor,
}

impl AdminRole {
    /// Unknown names yield `None`; such tokens authenticate but grant nothing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ROLE_ADMIN => Some(Self::Admin),
            ROLE_EDITOR => Some(Self::Editor),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Editor => ROLE_EDITOR,
        }
    }

    /// Navigation, page texts, services, the UI dictionary and the inbox.
    pub fn can_edit_content(self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }

    /// Vehicles, branding and analytics.
    pub fn can_manage_site(self) -> bool {
        self == Self::Admin
    }
}
