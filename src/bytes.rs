use alloc::vec::Vec;

/// XOR two byte slices
///
/// Returns the bitwise XOR of the two byte slices
///
/// If lengths are unequal, XOR of the min length
pub fn xor(el: &[u8], ar: &[u8]) -> Vec<u8> {
    let len = core::cmp::min(el.len(), ar.len());
    let mut res: Vec<u8> = Vec::with_capacity(len);
    for (eb, ab) in el[..len].iter().zip(ar[..len].iter()) {
        res.push(eb ^ ab);
    }
    res
}

/// XOR a byte slice with a repeating key byte
pub fn xor_key(bytes: &[u8], key: u8) -> Vec<u8> {
    let mut res: Vec<u8> = Vec::with_capacity(bytes.len());
    for &byte in bytes.iter() {
        res.push(byte ^ key);
    }
    res
}
