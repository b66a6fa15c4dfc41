//! # Antipode - Antipodal Point Library
//!
//! Library for computing the antipodal (diametrically opposite) point of a
//! geographic coordinate and for fetching short descriptions of notable
//! places near a coordinate from a geosearch-capable knowledge API
//! (English Wikipedia by default).
//!
//! ## Quick Start
//!
//! ```ignore
//! use antipode::{antipode, Coordinate, PlaceLookupClient};
//!
//! // Pure coordinate math, no I/O
//! let (lat, lon) = antipode(40.7, -74.0);
//! assert_eq!((lat, lon), (-40.7, 106.0));
//!
//! // Nearby notable places (two API round trips)
//! let client = PlaceLookupClient::new();
//! let places = client.places_near(Coordinate::new(lat, lon)).await?;
//! for place in places {
//!     println!("{}: {}", place.title, place.url);
//! }
//! ```
//!
//! ## Coordinate Convention
//!
//! Latitude and longitude are decimal degrees (WGS84). The antipode of
//! `(lat, lon)` negates the latitude and shifts the longitude by 180°,
//! re-wrapped into [-180, 180]. A longitude of exactly 0 maps to 180
//! (not -180); both denote the same meridian but the positive value is
//! the one produced here.

pub mod error;
pub mod geo;
pub mod lookup;

// Re-export main types at crate root for convenience
pub use error::{LookupError, Result};
pub use geo::{antipode, Coordinate};
pub use lookup::{PlaceLookupClient, PlaceSummary, RESULT_LIMIT, SEARCH_RADIUS_METERS};
