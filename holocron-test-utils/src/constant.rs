//! Placeholder values shared by fixtures and tests.

/// Password hash stored for fixture users.
///
/// A syntactically valid Argon2id PHC string; no fixture ever needs to verify a password
/// against it.
pub static TEST_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$0v5bTnGzfzQJ7Dx3VbTc1e5Ry1pD2p0C0bUu2Zl5c2g";

/// Email of the user created by [`crate::TestBuilder::with_current_user`].
pub static TEST_USER_EMAIL: &str = "user@example.com";

/// Height recorded for fixture characters.
pub static TEST_CHARACTER_HEIGHT: &str = "172";

/// Eye color recorded for fixture characters.
pub static TEST_CHARACTER_EYE_COLOR: &str = "blue";
