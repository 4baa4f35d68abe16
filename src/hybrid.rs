use alloc::vec::Vec;

use crate::bytes;
use crate::rsa;
use crate::rsa::Error as RsaError;

#[derive(Debug, PartialEq)]
pub enum Error {
    KeyRecovery,
    Rsa(RsaError),
}

/// A message sealed under a wrapped session key
///
/// The token is the session key byte encrypted with the recipient's
/// public key, the ciphertext is the body XORed with that byte
#[derive(Debug, PartialEq)]
pub struct SealedMessage {
    pub key_token: i64,
    pub ciphertext: Vec<u8>,
}

/// Seal a message: wrap the session key byte, then XOR the body
///
/// The modulus must exceed 255 for the key byte to survive the round
/// trip
///
/// errors: returns Error when the public key is unusable
pub fn encrypt(plaintext: &[u8], key: u8, e: i64, n: i64) -> Result<SealedMessage, Error> {
    let key_token = rsa::encrypt_unit(key as i64, e, n).map_err(|err| Error::Rsa(err))?;

    Ok(SealedMessage {
        key_token: key_token,
        ciphertext: bytes::xor_key(plaintext, key),
    })
}

/// Open a sealed message: unwrap the session key byte, then XOR
///
/// errors: returns Error when the private key is unusable, or when the
/// recovered key unit is not a byte
pub fn decrypt(sealed: &SealedMessage, d: i64, n: i64) -> Result<Vec<u8>, Error> {
    let unit = rsa::decrypt_unit(sealed.key_token, d, n).map_err(|err| Error::Rsa(err))?;
    if unit < 0 || unit > 255 {
        return Err(Error::KeyRecovery);
    }

    Ok(bytes::xor_key(&sealed.ciphertext, unit as u8))
}
