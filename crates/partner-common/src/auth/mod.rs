//! Authentication utilities
//!
//! The session provider that issues end-user tokens is an external
//! collaborator; this module only verifies role-bearing access tokens at the
//! service boundary (and can sign them for tests and tooling).

mod jwt;

pub use jwt::{Claims, JwtService};
