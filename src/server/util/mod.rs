//! Utility functions shared by services.

/// Argon2id password hashing.
pub mod password;
