//! Integration tests for utm-zone through the public API.

use approx::assert_relative_eq;
use utm_zone::{lat_lon_zone, lookup_srid, parse_zone, Hemisphere, Zone, ZoneError};

#[test]
fn test_srid_roundtrip_north() {
    for srid in 32601..=32660 {
        let zone = lookup_srid(srid).expect("valid northern SRID");
        assert!(zone.north);
        assert_eq!(zone.letter, None);
        assert_eq!(zone.srid(), srid);
    }
}

#[test]
fn test_srid_roundtrip_south() {
    for srid in 32701..=32760 {
        let zone = lookup_srid(srid).expect("valid southern SRID");
        assert!(!zone.north);
        assert_eq!(zone.letter, None);
        assert_eq!(zone.srid(), srid);
    }
}

#[test]
fn test_invalid_srid_returns_nothing() {
    assert_eq!(lookup_srid(1), None);
    assert_eq!(Zone::try_from(1_i64), Err(ZoneError::InvalidSrid(1)));
}

#[test]
fn test_designator_roundtrip_through_srid() {
    let zone = parse_zone("32N").unwrap();
    assert_eq!(zone, Zone::new(32, Some('N'), true));
    assert_eq!(zone.srid(), 32632);

    // The band letter is lost on the way back
    let back = lookup_srid(zone.srid()).unwrap();
    assert_eq!(back, Zone::new(32, None, true));
    assert_eq!(back.to_string(), "32? (north)");
}

#[test]
fn test_southern_designator() {
    let zone = parse_zone("4C").unwrap();
    assert_eq!(zone, Zone::new(4, Some('C'), false));
    assert_eq!(zone.hemisphere(), Hemisphere::South);
    assert_eq!(zone.srid(), 32704);
    assert_eq!(zone.to_string(), "4C (south)");
}

#[test]
fn test_malformed_designators() {
    assert_eq!(parse_zone("X"), None);
    assert_eq!(parse_zone("32I"), None);
    assert_eq!(parse_zone("N32"), None);
    assert!(matches!("X".parse::<Zone>(), Err(ZoneError::TooShort(_))));
}

#[test]
fn test_coordinate_zone_matches_designator() {
    // Cities well inside the regular grid
    let cases = [
        ((40.7128, -74.0060), "18T"),
        ((51.5074, -0.1278), "30U"),
        ((-33.8688, 151.2093), "56H"),
        ((-22.9068, -43.1729), "23K"),
        ((35.6762, 139.6503), "54S"),
    ];

    for ((lat, lon), designator) in cases {
        let zone = lat_lon_zone(lat, lon);
        assert_eq!(Some(zone), parse_zone(designator), "({}, {})", lat, lon);
    }
}

#[test]
fn test_special_regions_have_no_letter() {
    let bergen = lat_lon_zone(60.39, 5.32);
    assert_eq!(bergen, Zone::new(32, None, true));
    assert_eq!(bergen.to_string(), "32? (north)");

    let longyearbyen = lat_lon_zone(78.22, 15.65);
    assert_eq!(longyearbyen, Zone::new(33, None, true));
}

#[test]
fn test_polar_limit() {
    let zone = lat_lon_zone(84.0, 15.0);
    assert_eq!(zone.number, 33);
    assert_eq!(zone.letter, None);
    assert!(zone.north);
}

#[test]
fn test_coordinate_lies_within_zone() {
    for lon in (-179..180).step_by(7) {
        let lon = f64::from(lon) + 0.5;
        let zone = lat_lon_zone(10.0, lon);
        let meridian = zone.central_meridian();
        assert!(
            (lon - meridian).abs() <= 3.0,
            "lon {} not within 3° of zone {} meridian {}",
            lon,
            zone,
            meridian
        );
    }
}

#[test]
fn test_central_meridian() {
    assert_relative_eq!(Zone::new(1, None, true).central_meridian(), -177.0);
    assert_relative_eq!(Zone::new(31, None, true).central_meridian(), 3.0);
}
