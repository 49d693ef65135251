//! Place-name geocoding and S2 cell neighborhood enumeration.
//!
//! Resolves a human-readable place name to coordinates through an external
//! geocoding provider, then enumerates fixed-level S2 cells around the point
//! for area-based search or geofencing.
//!
//! ```rust
//! use locus::cells;
//!
//! // Hilbert-order walk around a point: 2 * radius + 1 cells, sorted
//! let walk = cells::cell_walk(40.7128, -74.0060, 10, true);
//! assert_eq!(walk.len(), 21);
//!
//! // Square grid expansion around the containing cell: (2r + 1)^2 cells
//! let origin = cells::cell_id_for(40.7128, -74.0060);
//! assert_eq!(cells::grid_neighbors(origin, 1).len(), 9);
//! ```
//!
//! Geocoding goes through [`Location`]:
//!
//! ```no_run
//! use locus::{Config, Location};
//!
//! let config = Config::with_api_key("secret");
//! let home = Location::resolve("Central Park, New York", &config)?;
//! let cells = home.cells()?;
//! # Ok::<(), locus::LocusError>(())
//! ```

pub mod cells;
pub mod config;
pub mod error;
pub mod geocode;
pub mod location;
pub mod spatial;

pub use config::Config;
pub use error::{GeocodingError, LocusError, Result};

pub use cells::{
    CELL_LEVEL, DEFAULT_NEIGHBOR_RADIUS, DEFAULT_WALK_RADIUS, cell_id_for, cell_walk,
    grid_neighbors,
};

pub use geocode::{GeocodedPlace, Geocoder, HttpGeocoder};

pub use location::{Coordinate, DEFAULT_ALTITUDE, Location, Position};

pub use spatial::{DistanceMetric, distance, distance_between};

pub use geo::Point;
pub use s2::cellid::CellID;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, Location, LocusError, Result};

    pub use crate::cells::{cell_id_for, cell_walk, grid_neighbors};

    pub use crate::spatial::{DistanceMetric, distance};

    pub use crate::{CellID, Point};
}
