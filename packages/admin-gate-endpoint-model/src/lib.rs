
use serde::{Deserialize, Serialize};

/// Body of `GET /api/auth/status`.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
}

impl AuthStatusResponse {
    pub const fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }
}

pub type AdminAreaResult = Result<AdminAreaNotice, AdminAreaError>;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct AdminAreaNotice;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum AdminAreaError {
    Unauthorized,
}
