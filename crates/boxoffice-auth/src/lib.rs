//! # boxoffice-auth
//!
//! Authentication and authorization for BoxOffice.
//!
//! ## Modules
//!
//! - `jwt` - signed identity tokens: issuing and validating claims
//! - `password` - the credential hasher seam and its Argon2id implementation
//! - `gate` - turns a presented token into an [`Identity`] and enforces the
//!   admin / any-authenticated-user policy
//! - `error` - token validation failures

pub mod error;
pub mod gate;
pub mod identity;
pub mod jwt;
pub mod password;

pub use error::TokenError;
pub use gate::AccessGate;
pub use identity::Identity;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{CredentialHasher, PasswordHasher};
