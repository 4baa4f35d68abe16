use alloc::vec::Vec;

use crate::encoding;
use crate::modmath;
use crate::modmath::Error as MathError;

/// First choice public exponent
pub const PUBLIC_EXPONENT: i64 = 17;

/// Exponent used when 17 divides phi
pub const FALLBACK_EXPONENT: i64 = 65537;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidPrime,
    KeyGeneration,
    Math(MathError),
}

/// Toy RSA keypair
///
/// (n, e) is the public half, (n, d) the private half
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyPair {
    pub n: i64,
    pub e: i64,
    pub d: i64,
}

/// Generate a toy keypair from two primes
///
/// The public exponent is 17, falling back to 65537 when 17 divides
/// phi. Inputs are assumed prime, primality is not checked
///
/// errors: returns Error on inputs below 2, on modulus overflow, and
/// when neither candidate exponent has an inverse under phi
pub fn generate_keys(p: i64, q: i64) -> Result<KeyPair, Error> {
    if p < 2 || q < 2 {
        return Err(Error::InvalidPrime);
    }

    let n = p.checked_mul(q).ok_or(Error::InvalidPrime)?;
    // phi < n, so it cannot overflow when n does not
    let phi = (p - 1) * (q - 1);

    let mut e = PUBLIC_EXPONENT;
    if modmath::gcd(e as u64, phi as u64) != 1 {
        e = FALLBACK_EXPONENT;
    }

    let d = match modmath::mod_inverse(e, phi) {
        Ok(d) => d,
        Err(MathError::NoInverse) => return Err(Error::KeyGeneration),
        Err(err) => return Err(Error::Math(err)),
    };

    Ok(KeyPair { n: n, e: e, d: d })
}

/// Encrypt one message unit with a public key
///
/// Units at or above the modulus do not round trip
///
/// errors: returns Error on non-positive modulus
pub fn encrypt_unit(unit: i64, e: i64, n: i64) -> Result<i64, Error> {
    modmath::mod_pow(unit, e, n).map_err(|err| Error::Math(err))
}

/// Decrypt one message unit with a private key
///
/// errors: returns Error on non-positive modulus
pub fn decrypt_unit(unit: i64, d: i64, n: i64) -> Result<i64, Error> {
    modmath::mod_pow(unit, d, n).map_err(|err| Error::Math(err))
}

/// Encrypt a byte message with a public key, one unit per byte
///
/// Bytes round trip only when the modulus exceeds 255
///
/// errors: returns Error on non-positive modulus
pub fn encrypt_bytes(message: &[u8], e: i64, n: i64) -> Result<Vec<i64>, Error> {
    let units = encoding::bytes_to_units(message);
    let mut res = Vec::with_capacity(units.len());
    for &unit in units.iter() {
        res.push(encrypt_unit(unit, e, n)?);
    }
    Ok(res)
}

/// Decrypt unit ciphertext with a private key back to bytes
///
/// Units that do not decrypt into the byte range are dropped
///
/// errors: returns Error on non-positive modulus
pub fn decrypt_bytes(ciphertext: &[i64], d: i64, n: i64) -> Result<Vec<u8>, Error> {
    let mut units = Vec::with_capacity(ciphertext.len());
    for &unit in ciphertext.iter() {
        units.push(decrypt_unit(unit, d, n)?);
    }
    Ok(encoding::units_to_bytes(&units))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_generate_keys() {
        let pair = generate_keys(61, 53).unwrap();
        assert_eq!(pair, KeyPair { n: 3233, e: 17, d: 2753 });

        // d inverts e under phi for every pair
        for &(p, q) in [(61, 53), (11, 13), (103, 7)].iter() {
            let pair = generate_keys(p, q).unwrap();
            let phi = (p - 1) * (q - 1);
            assert_eq!((pair.e as i128 * pair.d as i128).rem_euclid(phi as i128), 1);
        }
    }

    #[test]
    fn check_generate_keys_fallback() {
        // phi = 102 * 6 = 612 is divisible by 17
        let pair = generate_keys(103, 7).unwrap();
        assert_eq!(pair.e, FALLBACK_EXPONENT);
        assert_eq!(pair.d, 485);
    }

    #[test]
    fn check_generate_keys_errors() {
        assert_eq!(generate_keys(1, 53), Err(Error::InvalidPrime));
        assert_eq!(generate_keys(61, 0), Err(Error::InvalidPrime));
        assert_eq!(generate_keys(-5, 13), Err(Error::InvalidPrime));
        assert_eq!(generate_keys(i64::MAX, i64::MAX), Err(Error::InvalidPrime));

        // phi = 17 * 65537 defeats both candidate exponents
        assert_eq!(generate_keys(18, 65538), Err(Error::KeyGeneration));
    }

    #[test]
    fn check_units() {
        let pair = generate_keys(61, 53).unwrap();
        assert_eq!(encrypt_unit(65, pair.e, pair.n).unwrap(), 2790);
        assert_eq!(decrypt_unit(2790, pair.d, pair.n).unwrap(), 65);

        // every unit below the modulus round trips
        let pair = generate_keys(11, 13).unwrap();
        for unit in 0..pair.n {
            let ciphertext = encrypt_unit(unit, pair.e, pair.n).unwrap();
            assert_eq!(decrypt_unit(ciphertext, pair.d, pair.n).unwrap(), unit);
        }

        assert_eq!(
            encrypt_unit(5, 17, 0),
            Err(Error::Math(MathError::InvalidModulus))
        );
    }

    #[test]
    fn check_bytes() {
        let pair = generate_keys(61, 53).unwrap();
        let message = b"Hello, world";

        let ciphertext = encrypt_bytes(message, pair.e, pair.n).unwrap();
        assert_eq!(ciphertext.len(), message.len());
        assert_eq!(ciphertext[0], encrypt_unit(b'H' as i64, pair.e, pair.n).unwrap());

        let plaintext = decrypt_bytes(&ciphertext, pair.d, pair.n).unwrap();
        assert_eq!(plaintext[..], message[..]);
    }

    #[test]
    fn check_bytes_small_modulus() {
        // n = 143 cannot carry a full byte: 200 wraps to 200 - 143
        let pair = generate_keys(11, 13).unwrap();
        let ciphertext = encrypt_bytes(&[200], pair.e, pair.n).unwrap();
        let plaintext = decrypt_bytes(&ciphertext, pair.d, pair.n).unwrap();
        assert_eq!(plaintext[..], [57][..]);
    }
}
