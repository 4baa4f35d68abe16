use alloc::vec;
use alloc::vec::Vec;

use rand::RngCore;

use crate::bytes;

#[derive(Debug, PartialEq)]
pub enum Error {
    KeyLength,
}

/// Encrypt a message with a one-time pad
///
/// errors: returns Error unless the pad is exactly message length
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    if plaintext.len() != key.len() {
        return Err(Error::KeyLength);
    }
    Ok(bytes::xor(plaintext, key))
}

/// Decrypt a message encrypted with a one-time pad
///
/// Same XOR as encryption
///
/// errors: returns Error unless the pad is exactly message length
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, Error> {
    encrypt(ciphertext, key)
}

/// Generate a uniform random pad of the given length
pub fn generate_random_key<R: RngCore>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut key = vec![0_u8; length];
    rng.fill_bytes(&mut key);
    key
}
