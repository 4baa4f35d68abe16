#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidModulus,
    NoInverse,
}

/// Modular exponentiation by repeated squaring
///
/// Negative bases are reduced into the modulus first.
/// Non-positive exponents return 1
///
/// errors: returns Error on non-positive modulus
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64, Error> {
    if modulus <= 0 {
        return Err(Error::InvalidModulus);
    }

    // widen to avoid overflow when squaring
    let modulus = modulus as i128;
    let mut base = (base as i128).rem_euclid(modulus);
    let mut exponent = exponent;
    let mut result = 1_i128;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = (result * base) % modulus;
        }
        exponent >>= 1;
        base = (base * base) % modulus;
    }

    Ok(result as i64)
}

/// Extended Euclidean algorithm
///
/// Returns (g, x, y) satisfying a*x + b*y = g, with g = gcd(a, b)
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1_i64, 0_i64);
    let (mut old_y, mut y) = (0_i64, 1_i64);

    while r != 0 {
        let quotient = old_r / r;

        let temp = old_r - quotient * r;
        old_r = r;
        r = temp;

        let temp = old_x - quotient * x;
        old_x = x;
        x = temp;

        let temp = old_y - quotient * y;
        old_y = y;
        y = temp;
    }

    (old_r, old_x, old_y)
}

/// Modular multiplicative inverse of a under m
///
/// Result is normalized into [0, m)
///
/// errors: returns Error on non-positive modulus, or when gcd(a, m) != 1
pub fn mod_inverse(a: i64, m: i64) -> Result<i64, Error> {
    if m <= 0 {
        return Err(Error::InvalidModulus);
    }

    let (g, x, _) = extended_gcd(a, m);
    if g != 1 {
        return Err(Error::NoInverse);
    }

    Ok(x.rem_euclid(m))
}

/// Greatest common divisor, Euclidean division
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor, binary (Stein) variant
///
/// Strips shared factors of two with trailing_zeros, subtracts odd remainders.
/// Agrees with gcd on all inputs
pub fn binary_gcd(a: u64, b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    let mut a = a >> a.trailing_zeros();
    let mut b = b;

    while b != 0 {
        b >>= b.trailing_zeros();
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        b -= a;
    }

    a << shift
}
