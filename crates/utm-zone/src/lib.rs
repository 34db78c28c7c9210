//! # utm-zone
//!
//! Universal Transverse Mercator (UTM) grid zone lookup.
//!
//! This crate classifies a location into its UTM grid zone and converts
//! between the common representations of a zone:
//! - geographic coordinates (latitude/longitude in degrees)
//! - EPSG/SRID codes for WGS 84 UTM (`32601`-`32660` north, `32701`-`32760` south)
//! - zone designators such as `32N` or `4C`
//!
//! No projection math is performed; only the zone is determined.
//!
//! ## Overview
//!
//! UTM divides the earth into 60 longitudinal zones of 6° each, numbered
//! eastward from 180°W. Each zone is further divided into latitude bands of
//! 8°, lettered `C` through `X` (skipping `I` and `O`). Band `X` is 12° tall
//! and covers 72°N to 84°N. Two regions use non-standard zone widths:
//! south-western Norway (zone 32 is widened) and Svalbard (only the odd
//! zones 31, 33, 35 and 37 are used).
//!
//! ## Examples
//!
//! ```
//! use utm_zone::Zone;
//!
//! // Zone for a coordinate
//! let zone = Zone::from_lat_lon(47.6062, -122.3321);
//! assert_eq!(zone.to_string(), "10T (north)");
//! assert_eq!(zone.srid(), 32610);
//!
//! // Parse a designator
//! let zone: Zone = "32N".parse()?;
//! assert_eq!(zone.central_meridian(), 9.0);
//!
//! // SRID codes carry no latitude band
//! let zone = Zone::from_srid(32733).unwrap();
//! assert_eq!(zone.to_string(), "33? (south)");
//! # Ok::<(), utm_zone::ZoneError>(())
//! ```

mod error;
mod zone;

pub use error::ZoneError;
pub use zone::{lat_lon_zone, lookup_srid, parse_zone, Hemisphere, Zone};

/// Result type for zone operations.
pub type Result<T> = std::result::Result<T, ZoneError>;
