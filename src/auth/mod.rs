//! Authentication: register, login, token verification, user listing.

mod handlers;
mod jwt;
mod service;

pub use handlers::{list_users, login, register, secret};
pub use jwt::{Claims, JwtSecret};
pub use service::{hash_password, verify_password};
