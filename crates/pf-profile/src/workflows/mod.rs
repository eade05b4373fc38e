//! The multi-step sequences behind the profile screen.
//!
//! Workflows borrow their collaborators and return structured results;
//! view state, notifications and navigation stay with
//! [`ProfileScreen`](crate::ProfileScreen).

pub mod account_deletion;
pub mod avatar_upload;
pub mod profile_loader;
