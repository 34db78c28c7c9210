//! UTM zone representation and lookups.

use crate::{Result, ZoneError};
use std::fmt;
use std::str::FromStr;

/// SRID offset for northern hemisphere zones (WGS 84 / UTM zone N).
const NORTH_SRID_BASE: i64 = 32600;

/// SRID offset for southern hemisphere zones (WGS 84 / UTM zone S).
const SOUTH_SRID_BASE: i64 = 32700;

/// Number of zones per hemisphere.
const ZONE_COUNT: i64 = 60;

/// Latitude band letters from 80°S northward, 8° each.
/// `X` appears twice since the top band spans 72°N to 84°N.
const BAND_LETTERS: &[u8; 21] = b"CDEFGHJKLMNPQRSTUVWXX";

/// Southern edge of the band table (degrees).
const BAND_MIN_LAT: f64 = -80.0;

/// Northern edge of the band table (degrees, exclusive).
const BAND_MAX_LAT: f64 = 84.0;

/// Hemisphere of a UTM zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    /// Latitude >= 0, bands `N` through `X`.
    North,
    /// Latitude < 0, bands `C` through `M`.
    South,
}

impl Hemisphere {
    /// Hemisphere for a north flag.
    pub fn from_north(north: bool) -> Self {
        if north {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hemisphere::North => write!(f, "north"),
            Hemisphere::South => write!(f, "south"),
        }
    }
}

/// A UTM grid zone.
///
/// Values are never validated: a zone assembled by hand, or parsed from a
/// designator like `999N`, keeps whatever number and letter it was given.
/// Derived values (SRID, central meridian) are then extrapolated from the
/// same formulas.
///
/// The default value (zone 0, no letter, south) is not a real zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    /// Zone number, nominally 1-60.
    pub number: i64,
    /// Latitude band letter (`C`-`X` without `I`, `O`), if known.
    pub letter: Option<char>,
    /// Northern hemisphere flag.
    pub north: bool,
}

impl Zone {
    /// Create a zone from its parts.
    pub fn new(number: i64, letter: Option<char>, north: bool) -> Self {
        Self {
            number,
            letter,
            north,
        }
    }

    /// The zone's hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_north(self.north)
    }

    /// EPSG/SRID code of the WGS 84 UTM projection for this zone.
    ///
    /// `32600 + number` in the north, `32700 + number` in the south.
    /// Numbers near `i64::MAX` wrap around.
    pub fn srid(&self) -> i64 {
        let base = if self.north {
            NORTH_SRID_BASE
        } else {
            SOUTH_SRID_BASE
        };
        self.number.wrapping_add(base)
    }

    /// Look up a zone by its EPSG/SRID code.
    ///
    /// SRID codes do not encode a latitude band, so the returned zone
    /// never has a letter. Returns `None` for codes outside
    /// `32601..=32660` and `32701..=32760`.
    pub fn from_srid(srid: i64) -> Option<Self> {
        let north_codes = NORTH_SRID_BASE + 1..=NORTH_SRID_BASE + ZONE_COUNT;
        let south_codes = SOUTH_SRID_BASE + 1..=SOUTH_SRID_BASE + ZONE_COUNT;

        let (number, north) = if north_codes.contains(&srid) {
            (srid - NORTH_SRID_BASE, true)
        } else if south_codes.contains(&srid) {
            (srid - SOUTH_SRID_BASE, false)
        } else {
            return None;
        };

        Some(Self::new(number, None, north))
    }

    /// Longitude of the zone's central meridian in degrees.
    ///
    /// Zone 1 is centered on 177°W and each zone is 6° wide. Numbers
    /// outside 1-60 are extrapolated, not wrapped.
    pub fn central_meridian(&self) -> f64 {
        (self.number as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }

    /// Determine the zone containing a coordinate.
    ///
    /// Applies the Norway (zone 32 widened) and Svalbard (zones 31/33/35/37)
    /// exceptions before the regular 6° grid. Zones produced by either
    /// exception carry no band letter. Latitudes outside [-80, 84) have no
    /// band letter either.
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees (-90 to 90)
    /// * `lon` - Longitude in degrees (conventionally -180 to 180)
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        let north = lat >= 0.0;

        if (56.0..=64.0).contains(&lat) && (3.0..=12.0).contains(&lon) {
            log::trace!("({}, {}) falls in the Norway exception, using zone 32", lat, lon);
            return Self::new(32, None, north);
        }

        if (72.0..=84.0).contains(&lat) && lon >= 0.0 {
            if let Some(number) = svalbard_zone(lon) {
                log::trace!(
                    "({}, {}) falls in the Svalbard exception, using zone {}",
                    lat,
                    lon,
                    number
                );
                return Self::new(number, None, north);
            }
        }

        // `as` saturates and maps NaN to 0
        let number = (((lon + 180.0) / 6.0).floor() as i64).saturating_add(1);

        Self::new(number, Self::band_letter(lat), north)
    }

    /// Latitude band letter for a latitude, if it lies in [-80, 84).
    pub fn band_letter(lat: f64) -> Option<char> {
        if !(BAND_MIN_LAT..BAND_MAX_LAT).contains(&lat) {
            return None;
        }
        let index = ((lat - BAND_MIN_LAT) / 8.0).floor() as usize;
        BAND_LETTERS.get(index).map(|&b| b as char)
    }

    /// Classify a band letter (case-insensitive) by hemisphere.
    ///
    /// Returns `Some(true)` for `N`-`X`, `Some(false)` for `C`-`M`, and
    /// `None` for anything else, including `I` and `O`.
    pub fn is_north_letter(letter: char) -> Option<bool> {
        match letter.to_ascii_uppercase() {
            'N' | 'P' | 'Q' | 'R' | 'S' | 'T' | 'U' | 'V' | 'W' | 'X' => Some(true),
            'C' | 'D' | 'E' | 'F' | 'G' | 'H' | 'J' | 'K' | 'L' | 'M' => Some(false),
            _ => None,
        }
    }

    /// Parse a zone designator, discarding the failure reason.
    ///
    /// See the [`FromStr`] implementation for the accepted format.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// Svalbard zone for a longitude east of Greenwich, if it is covered.
fn svalbard_zone(lon: f64) -> Option<i64> {
    if lon <= 9.0 {
        Some(31)
    } else if lon <= 21.0 {
        Some(33)
    } else if lon <= 33.0 {
        Some(35)
    } else if lon <= 42.0 {
        Some(37)
    } else {
        None
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} ({})",
            self.number,
            self.letter.unwrap_or('?'),
            self.hemisphere()
        )
    }
}

impl FromStr for Zone {
    type Err = ZoneError;

    /// Parse a zone number followed by a single band letter, e.g. `32N`.
    ///
    /// The number may carry a sign and is not range checked. The letter is
    /// matched case-insensitively but stored as given.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = match chars.next_back() {
            Some(letter) if !chars.as_str().is_empty() => letter,
            _ => return Err(ZoneError::TooShort(s.to_string())),
        };

        let number = chars
            .as_str()
            .parse::<i64>()
            .map_err(|source| ZoneError::InvalidNumber {
                input: s.to_string(),
                source,
            })?;

        let north = Self::is_north_letter(letter).ok_or_else(|| ZoneError::InvalidLetter {
            input: s.to_string(),
            letter,
        })?;

        Ok(Self::new(number, Some(letter), north))
    }
}

impl TryFrom<i64> for Zone {
    type Error = ZoneError;

    fn try_from(srid: i64) -> Result<Self> {
        Self::from_srid(srid).ok_or(ZoneError::InvalidSrid(srid))
    }
}

/// Zone containing a coordinate. See [`Zone::from_lat_lon`].
pub fn lat_lon_zone(lat: f64, lon: f64) -> Zone {
    Zone::from_lat_lon(lat, lon)
}

/// Zone for an EPSG/SRID code. See [`Zone::from_srid`].
pub fn lookup_srid(srid: i64) -> Option<Zone> {
    Zone::from_srid(srid)
}

/// Parse a zone designator. See [`Zone::parse`].
pub fn parse_zone(text: &str) -> Option<Zone> {
    Zone::parse(text)
}
