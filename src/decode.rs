use image::Rgba;
use thiserror::Error;

use crate::image_spec::{ImageSpec, BLACK, WHITE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid number of arguments")]
    ArgumentCount,
}

/// Decodes a URL path (leading slash already stripped) into an [`ImageSpec`].
///
/// The segment count picks the interpretation:
/// - `WxH` — white background, black foreground
/// - `WxH/bg` — parsed background, white foreground
/// - `WxH/bg/fg` — parsed background and foreground
///
/// Anything else is an argument-count error. Malformed dimensions and
/// colors fall back to zero or the default color instead of failing;
/// that permissiveness is part of the contract.
pub fn decode(path: &str) -> Result<ImageSpec, DecodeError> {
    if path.is_empty() {
        return Err(DecodeError::ArgumentCount);
    }

    let segments: Vec<&str> = path.split('/').collect();
    let (dimensions, foreground, background) = match segments.as_slice() {
        [dim] => (*dim, BLACK, WHITE),
        [dim, bg] => (*dim, WHITE, parse_color(bg, BLACK)),
        [dim, bg, fg] => (*dim, parse_color(fg, BLACK), parse_color(bg, WHITE)),
        _ => return Err(DecodeError::ArgumentCount),
    };

    let (width, height) = parse_dimensions(dimensions);
    Ok(ImageSpec::new(width, height, foreground, background))
}

/// Parses `WxH`, or a single `S` used for both axes. Any other shape or
/// a non-numeric part yields 0 for the affected axis.
fn parse_dimensions(dim: &str) -> (u32, u32) {
    let parts: Vec<&str> = dim.split('x').collect();
    match parts.as_slice() {
        [side] => {
            let side = side.parse().unwrap_or(0);
            (side, side)
        }
        [width, height] => (width.parse().unwrap_or(0), height.parse().unwrap_or(0)),
        _ => (0, 0),
    }
}

/// Parses a 3- or 6-digit hex color code into a fully opaque color.
/// A 3-digit code doubles each nibble (`f00` → `ff0000`). Any other
/// length returns `default` unchanged.
pub fn parse_color(code: &str, default: Rgba<u8>) -> Rgba<u8> {
    let code = code.as_bytes();
    match code.len() {
        3 => Rgba([
            hex_nibble(code[0]) << 4 | hex_nibble(code[0]),
            hex_nibble(code[1]) << 4 | hex_nibble(code[1]),
            hex_nibble(code[2]) << 4 | hex_nibble(code[2]),
            0xff,
        ]),
        6 => Rgba([
            hex_nibble(code[0]) << 4 | hex_nibble(code[1]),
            hex_nibble(code[2]) << 4 | hex_nibble(code[3]),
            hex_nibble(code[4]) << 4 | hex_nibble(code[5]),
            0xff,
        ]),
        _ => default,
    }
}

// Non-hex bytes decode to 0, matching the rest of the permissive grammar.
fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => 10 + b - b'a',
        b'A'..=b'F' => 10 + b - b'A',
        _ => 0,
    }
}
