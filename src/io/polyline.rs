//! Read and write the [encoded polyline] format.
//!
//! A polyline packs a sequence of coordinates into printable ASCII: each latitude and longitude
//! is scaled to an integer, delta encoded against the previous point, zig-zag encoded and then
//! written as little-endian 5-bit groups offset by 63. Latitude comes first on the wire, but the
//! decoded positions are in GeoJSON `[longitude, latitude]` order.
//!
//! [encoded polyline]: https://developers.google.com/maps/documentation/utilities/polylinealgorithm

use log::trace;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{LineString, Position};

/// Decimal digits kept by the classic format.
pub const DEFAULT_PRECISION: u32 = 5;

const MIN_BYTE: u8 = 63;
const MAX_BYTE: u8 = 126;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;

/// Decode a polyline with five digits of precision.
///
/// ```
/// use geojson_codec::io::polyline::decode_polyline;
///
/// let line = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// assert_eq!(line.num_positions(), 3);
/// assert_eq!(line.positions()[0].as_slice(), &[-120.2, 38.5]);
/// ```
pub fn decode_polyline(text: &str) -> Result<LineString> {
    decode_polyline_with_precision(text, DEFAULT_PRECISION)
}

/// Decode a polyline whose coordinates were scaled by `10^precision`.
///
/// Fails with [`GeoJsonError::InvalidPolyline`] on a byte outside the polyline alphabet, on input
/// that ends in the middle of a value or a point, and on a value wider than 64 bits. A polyline
/// that holds fewer than two points fails like any other short LineString.
pub fn decode_polyline_with_precision(text: &str, precision: u32) -> Result<LineString> {
    let factor = scale(precision);
    let bytes = text.as_bytes();
    let mut cursor = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut positions = Vec::with_capacity(bytes.len() / 4);

    while cursor < bytes.len() {
        lat = lat.wrapping_add(decode_value(bytes, &mut cursor)?);
        lng = lng.wrapping_add(decode_value(bytes, &mut cursor)?);
        positions.push(Position::new(vec![lng as f64 / factor, lat as f64 / factor])?);
    }

    trace!(
        "decoded polyline of {} bytes into {} positions",
        bytes.len(),
        positions.len()
    );
    LineString::try_new(positions)
}

/// Encode a LineString with five digits of precision.
pub fn encode_polyline(line_string: &LineString) -> String {
    encode_polyline_with_precision(line_string, DEFAULT_PRECISION)
}

/// Encode a LineString, scaling its coordinates by `10^precision`.
///
/// Only the first two dimensions of each position are written.
pub fn encode_polyline_with_precision(line_string: &LineString, precision: u32) -> String {
    let factor = scale(precision);
    let mut out = String::with_capacity(line_string.num_positions() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for position in line_string.positions() {
        let lat = (position.y() * factor).round() as i64;
        let lng = (position.x() * factor).round() as i64;
        encode_value(lat.wrapping_sub(prev_lat), &mut out);
        encode_value(lng.wrapping_sub(prev_lng), &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }
    out
}

fn scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

fn decode_value(bytes: &[u8], cursor: &mut usize) -> Result<i64> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let offset = *cursor;
        let byte = *bytes.get(offset).ok_or(GeoJsonError::InvalidPolyline {
            offset,
            reason: "input ends in the middle of a point",
        })?;
        if !(MIN_BYTE..=MAX_BYTE).contains(&byte) {
            return Err(GeoJsonError::InvalidPolyline {
                offset,
                reason: "byte outside the polyline alphabet",
            });
        }
        let chunk = u64::from(byte - MIN_BYTE);
        let bits = chunk & CHUNK_MASK;
        // Bits shifted past the top of the accumulator would be lost.
        if shift >= u64::BITS || (bits << shift) >> shift != bits {
            return Err(GeoJsonError::InvalidPolyline {
                offset,
                reason: "value exceeds 64 bits",
            });
        }

        result |= bits << shift;
        shift += CHUNK_BITS;
        *cursor += 1;
        if chunk < CONTINUATION {
            break;
        }
    }

    let magnitude = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !magnitude } else { magnitude })
}

fn encode_value(value: i64, out: &mut String) {
    let mut zigzag = ((value << 1) ^ (value >> 63)) as u64;
    while zigzag >= CONTINUATION {
        out.push(char::from((CONTINUATION | (zigzag & CHUNK_MASK)) as u8 + MIN_BYTE));
        zigzag >>= CHUNK_BITS;
    }
    out.push(char::from(zigzag as u8 + MIN_BYTE));
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test::linestring::ls1;

    const CANONICAL: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn assert_positions(line: &LineString, expected: &[[f64; 2]]) {
        assert_eq!(line.num_positions(), expected.len());
        for (position, expected) in line.positions().iter().zip(expected) {
            assert_relative_eq!(position.x(), expected[0], epsilon = 1e-9);
            assert_relative_eq!(position.y(), expected[1], epsilon = 1e-9);
        }
    }

    #[test]
    fn decode_canonical() {
        let line = decode_polyline(CANONICAL).unwrap();
        assert_positions(&line, &[[-120.2, 38.5], [-120.95, 40.7], [-126.453, 43.252]]);
    }

    #[test]
    fn encode_canonical() {
        let line =
            LineString::try_new([[-120.2, 38.5], [-120.95, 40.7], [-126.453, 43.252]]).unwrap();
        assert_eq!(encode_polyline(&line), CANONICAL);
    }

    #[test]
    fn precision_six() {
        let line = LineString::try_new([[13.388799, 52.517033], [13.397631, 52.529432]]).unwrap();
        let encoded = encode_polyline_with_precision(&line, 6);
        assert_ne!(encoded, encode_polyline(&line));
        let decoded = decode_polyline_with_precision(&encoded, 6).unwrap();
        assert_positions(&decoded, &[[13.388799, 52.517033], [13.397631, 52.529432]]);
    }

    #[test]
    fn encoding_drops_extra_dimensions() {
        let decoded = decode_polyline(&encode_polyline(&ls1())).unwrap();
        assert_positions(&decoded, &[[3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
    }

    #[test]
    fn single_point_is_too_short() {
        let err = decode_polyline("_p~iF~ps|U").unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidGeometry("LineString requires at least two positions".to_string())
        );
        assert!(matches!(
            decode_polyline("").unwrap_err(),
            GeoJsonError::InvalidGeometry(_)
        ));
    }

    #[test]
    fn truncated_value() {
        let err = decode_polyline("_p~i").unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidPolyline {
                offset: 4,
                reason: "input ends in the middle of a point",
            }
        );
    }

    #[test]
    fn missing_longitude() {
        let err = decode_polyline("_p~iF~ps|U_ulL").unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidPolyline {
                offset: 14,
                reason: "input ends in the middle of a point",
            }
        );
    }

    #[test]
    fn byte_outside_alphabet() {
        let err = decode_polyline("_p~iF ps|U").unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidPolyline {
                offset: 5,
                reason: "byte outside the polyline alphabet",
            }
        );
        assert!(decode_polyline("_p~iF\u{7f}").is_err());
    }

    #[test]
    fn overlong_value() {
        let err = decode_polyline(&"~".repeat(20)).unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidPolyline {
                offset: 12,
                reason: "value exceeds 64 bits",
            }
        );
    }

    #[test]
    fn sixty_fifth_bit_is_rejected() {
        // Twelve full groups carry 60 bits; a final group of 0b11111 needs 65.
        let err = decode_polyline(&format!("{}^???", "~".repeat(12))).unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidPolyline {
                offset: 12,
                reason: "value exceeds 64 bits",
            }
        );

        // A final group of 0b1111 fits exactly in 64 bits.
        let text = format!("{}N", "~".repeat(12));
        let mut cursor = 0;
        assert_eq!(decode_value(text.as_bytes(), &mut cursor).unwrap(), i64::MIN);
        assert_eq!(cursor, 13);
    }
}
