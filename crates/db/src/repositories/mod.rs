//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artwork_image_repo;
pub mod artwork_repo;
pub mod exhibition_repo;
pub mod qr_target;
pub mod qr_type_repo;

pub use artwork_image_repo::ArtworkImageRepo;
pub use artwork_repo::ArtworkRepo;
pub use exhibition_repo::ExhibitionRepo;
pub use qr_target::{QrTargetError, QrTargetRepo};
pub use qr_type_repo::QrTypeRepo;
