//! Middleware modules for request processing.
//!
//! - [`auth`]: Bearer-token authentication extractor and ownership check
//! - [`role`]: Role capability extractors (admin-only operations)
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The `AuthUser` extractor validates the JWT and yields its claims
//! 3. Where a path names a user, `authorize_owner` compares the verified
//!    email against the path parameter and refuses on mismatch
//! 4. Role-mutating handlers take `RequireAdmin`, which resolves the
//!    verified email in the user store and requires the admin role

pub mod auth;
pub mod role;
