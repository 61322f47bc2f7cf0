//! Request guards and typed session access.
//!
//! Guards are called from handlers rather than mounted as layers; each returns the resolved
//! pilot so the handler can use it without a second lookup.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
