/// Authenticated identity for a request.
///
/// Inserted into request extensions by the access gate; present on every
/// protected route. Holds exactly what the token asserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    username: String,
}

impl CurrentUser {
    pub fn new(username: String) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
