/// Role value that grants topic creation. Compared exactly, case-sensitive.
pub const ADMIN_ROLE: &str = "ADMIN";

/// A registered user. Immutable once added to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: String,
}

impl User {
    pub fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
