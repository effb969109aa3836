// Credential stub
// Hard-coded email/password matching. There is no real authentication layer;
// this mirrors the demo login exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ADMIN_EMAIL: &str = "admin@menucraft.com";
const ADMIN_PASSWORD: &str = "admin123";
const OWNER_EMAIL: &str = "owner@restaurant.com";
const OWNER_PASSWORD: &str = "owner123";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Owner,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub email: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

pub fn login(email: &str, password: &str) -> Result<Session, AuthError> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        return Ok(Session {
            role: Role::Admin,
            email: email.to_string(),
        });
    }
    if email == OWNER_EMAIL && password == OWNER_PASSWORD {
        return Ok(Session {
            role: Role::Owner,
            email: email.to_string(),
        });
    }
    Err(AuthError::InvalidCredentials)
}
