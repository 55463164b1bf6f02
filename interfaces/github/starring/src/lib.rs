//! Minimal GitHub REST client for starring repositories.
//!
//! Returns raw status and body; callers decide what a status means.

pub mod index;
