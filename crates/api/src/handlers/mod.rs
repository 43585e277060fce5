//! Request handlers.
//!
//! One submodule per route group. Handlers delegate persistence to
//! `reelfolio_db` repositories and map errors via [`crate::error::AppError`].

pub mod contact;
