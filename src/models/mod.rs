pub mod artist;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistDetail, ArtistInput, ArtistSummary};
pub use show::{ArtistShow, NewShow, Show, ShowListing, ShowPartition, VenueShow};
pub use venue::{Venue, VenueArea, VenueDetail, VenueInput, VenueSummary};
