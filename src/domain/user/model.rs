//! User domain entity

use chrono::{DateTime, Utc};

/// A registered account.
///
/// Two natural keys identify a user: the national id (digit string)
/// and the email address.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub national_id: String,
    pub phone: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Draft for creating a user; the password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub national_id: String,
    pub phone: String,
    pub password_hash: String,
}
