//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `ziranli_db` and
//! map errors via [`crate::error::AppError`].

pub mod artwork;
pub mod artwork_image;
pub mod exhibition;
pub mod qr;
