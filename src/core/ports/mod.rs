//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the matcher and the
//! document store holding profiles and schemes.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Handlers receive them explicitly instead of reaching
//! for global model singletons.

mod profile_repo;
mod scheme_repo;

pub use profile_repo::ProfileRepository;
pub use scheme_repo::SchemeRepository;
