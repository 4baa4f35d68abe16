use alloc::string::String;
use alloc::vec::Vec;

#[derive(Debug, PartialEq)]
pub enum Error {
    HexLength,
    ParseByte(u8),
}

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Hex-decode a string
///
/// errors: returns Error on odd length and empty hex strings,
/// and on non-hex digits
pub fn from_hex(hex: &str) -> Result<Vec<u8>, Error> {
    let hex = hex.as_bytes();
    let hex_len = hex.len();
    if hex_len % 2 != 0 || hex_len == 0 {
        return Err(Error::HexLength);
    }

    let mut res = Vec::with_capacity(hex_len / 2);
    for i in 0..(hex_len / 2) {
        let hi = from_hex_byte(hex[i * 2])?;
        let lo = from_hex_byte(hex[i * 2 + 1])?;
        res.push((hi << 4) | lo);
    }
    Ok(res)
}

/// Hex-encode a byte slice
pub fn to_hex(bytes: &[u8]) -> String {
    let mut res = String::with_capacity(bytes.len() * 2);
    for &byte in bytes.iter() {
        res.push(HEX_ALPHABET[(byte >> 4) as usize] as char);
        res.push(HEX_ALPHABET[(byte & 0x0f) as usize] as char);
    }
    res
}

/// Get the value of a hex digit, either case
fn from_hex_byte(byte: u8) -> Result<u8, Error> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(Error::ParseByte(byte)),
    }
}

/// Widen message bytes to integer units for the arithmetic ciphers
pub fn bytes_to_units(bytes: &[u8]) -> Vec<i64> {
    let mut res = Vec::with_capacity(bytes.len());
    for &byte in bytes.iter() {
        res.push(byte as i64);
    }
    res
}

/// Narrow integer units back to message bytes
///
/// Units outside the byte range are dropped
pub fn units_to_bytes(units: &[i64]) -> Vec<u8> {
    let mut res = Vec::with_capacity(units.len());
    for &unit in units.iter() {
        if unit >= 0 && unit <= 255 {
            res.push(unit as u8);
        }
    }
    res
}
