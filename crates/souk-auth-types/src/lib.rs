//! Gateway-injected caller identity types shared by Souk services.
//!
//! Authentication itself lives in the external identity provider; services
//! only ever see the trusted headers the gateway attaches after verifying
//! the session.

pub mod identity;
