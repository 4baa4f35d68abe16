use alloc::string::String;

/// Encrypt text with a Caesar shift
///
/// ASCII letters rotate within their own case, everything else passes
/// through unchanged. Any shift is accepted and reduced into [0, 26)
pub fn encrypt(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    let mut res = String::with_capacity(text.len());
    for c in text.chars() {
        res.push(shift_char(c, shift));
    }
    res
}

/// Decrypt text encrypted with a Caesar shift
pub fn decrypt(text: &str, shift: i32) -> String {
    encrypt(text, 26 - (shift % 26))
}

fn shift_char(c: char, shift: u8) -> char {
    if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + shift) % 26) + b'a') as char
    } else if c.is_ascii_uppercase() {
        (((c as u8 - b'A' + shift) % 26) + b'A') as char
    } else {
        c
    }
}
