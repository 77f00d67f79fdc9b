//! Collaborators that consume the resolved settings.

#[cfg(feature = "subsystem-email")]
pub mod email;
