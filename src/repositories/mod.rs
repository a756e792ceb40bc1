//! Data access for the `venues`, `artists` and `shows` tables.
//!
//! Reads run directly against the pool. Every write opens its own
//! transaction and commits before returning; an early return through `?`
//! drops the transaction, which rolls it back.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;

/// Wrap a user-supplied search term for a case-insensitive substring match.
pub(crate) fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}
