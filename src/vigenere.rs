use alloc::string::String;

/// Cycle the key to cover every character of the text
///
/// Empty text or key is returned unchanged
pub fn running_key(text: &str, key: &str) -> String {
    let text_len = text.chars().count();
    if text_len == 0 || key.is_empty() {
        return String::from(key);
    }

    let mut res = String::with_capacity(text_len);
    for k in key.chars().cycle().take(text_len) {
        res.push(k);
    }
    res
}

/// Encrypt text with a running Vigenere key
///
/// ASCII letters shift within their own case by the alphabetic value of
/// the running key character. Other characters pass through unchanged
/// but still consume a key position
pub fn encrypt(text: &str, key: &str) -> String {
    cipher_inner(text, key, true)
}

/// Decrypt text encrypted with a running Vigenere key
pub fn decrypt(text: &str, key: &str) -> String {
    cipher_inner(text, key, false)
}

fn cipher_inner(text: &str, key: &str, encrypting: bool) -> String {
    if text.is_empty() || key.is_empty() {
        return String::from(text);
    }

    let running = running_key(text, key);
    let mut res = String::with_capacity(text.len());
    for (c, k) in text.chars().zip(running.chars()) {
        let shift = key_shift(k);
        let shift = if encrypting { shift } else { -shift };
        res.push(shift_char(c, shift));
    }
    res
}

// key characters outside A-Z/a-z still shift deterministically,
// so out-of-contract keys round-trip
fn key_shift(k: char) -> i32 {
    if k.is_ascii_lowercase() {
        k as i32 - 'a' as i32
    } else {
        k as i32 - 'A' as i32
    }
}

fn shift_char(c: char, shift: i32) -> char {
    let shift = shift.rem_euclid(26) as u8;
    if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + shift) % 26) + b'a') as char
    } else if c.is_ascii_uppercase() {
        (((c as u8 - b'A' + shift) % 26) + b'A') as char
    } else {
        c
    }
}
