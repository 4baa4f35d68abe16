use alloc::string::String;
use alloc::vec::Vec;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidLetter(char),
    OddLength,
}

// Grid dimension of the key matrix
const GRID_SIZE: usize = 5;

// Letter inserted between doubled letters and appended to odd-length text
const FILLER: u8 = b'X';

/// 5x5 Playfair key matrix
///
/// Holds the 25 grid letters (A-Z with J merged into I) and a
/// precomputed letter -> cell lookup table. Immutable once built
pub struct KeyMatrix {
    grid: [[u8; GRID_SIZE]; GRID_SIZE],
    positions: [Option<(u8, u8)>; 26],
}

impl KeyMatrix {
    /// Build a key matrix from a keyword
    ///
    /// The key is uppercased, non-letters are dropped, J is merged into
    /// I, and repeated letters keep their first position. Remaining
    /// cells take the rest of the alphabet in order
    pub fn new(key: &str) -> KeyMatrix {
        let mut letters = [0_u8; GRID_SIZE * GRID_SIZE];
        let mut used = [false; 26];
        let mut count = 0;

        for c in key.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            let mut letter = c.to_ascii_uppercase() as u8;
            if letter == b'J' {
                letter = b'I';
            }
            if !used[(letter - b'A') as usize] {
                used[(letter - b'A') as usize] = true;
                letters[count] = letter;
                count += 1;
            }
        }

        for letter in b'A'..=b'Z' {
            if letter == b'J' {
                continue;
            }
            if !used[(letter - b'A') as usize] {
                used[(letter - b'A') as usize] = true;
                letters[count] = letter;
                count += 1;
            }
        }

        let mut grid = [[0_u8; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; 26];
        for (i, &letter) in letters.iter().enumerate() {
            let (row, col) = (i / GRID_SIZE, i % GRID_SIZE);
            grid[row][col] = letter;
            positions[(letter - b'A') as usize] = Some((row as u8, col as u8));
        }

        KeyMatrix {
            grid: grid,
            positions: positions,
        }
    }

    /// The grid letters, row major
    pub fn grid(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    /// Cell of an uppercase grid letter, None for anything else
    fn position(&self, c: char) -> Option<(usize, usize)> {
        if !c.is_ascii_uppercase() {
            return None;
        }
        self.positions[(c as u8 - b'A') as usize].map(|(row, col)| (row as usize, col as usize))
    }
}

/// Normalize plaintext into Playfair digraph form
///
/// Uppercases, drops non-letters, merges J into I, splits doubled
/// letters with the filler, and pads odd lengths with a trailing
/// filler. Only each just-completed pair is checked, so an inserted
/// filler may itself pair with a following repeat
pub fn prepare_text(text: &str) -> String {
    let mut prepared: Vec<u8> = Vec::with_capacity(text.len() + 1);

    for c in text.chars() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let mut letter = c.to_ascii_uppercase() as u8;
        if letter == b'J' {
            letter = b'I';
        }
        prepared.push(letter);

        let len = prepared.len();
        if len % 2 == 0 && prepared[len - 2] == prepared[len - 1] {
            prepared.insert(len - 1, FILLER);
        }
    }

    if prepared.len() % 2 != 0 {
        prepared.push(FILLER);
    }

    let mut res = String::with_capacity(prepared.len());
    for &letter in prepared.iter() {
        res.push(letter as char);
    }
    res
}

/// Encrypt plaintext with a key matrix
///
/// The plaintext is prepared first, so any input is accepted
pub fn encrypt(plaintext: &str, matrix: &KeyMatrix) -> String {
    let prepared = prepare_text(plaintext);
    let chars: Vec<char> = prepared.chars().collect();

    let mut res = String::with_capacity(chars.len());
    for pair in chars.chunks(2) {
        if let [a, b] = *pair {
            // prepared text only holds grid letters
            if let Ok((ca, cb)) = transform_pair(matrix, a, b, 1) {
                res.push(ca as char);
                res.push(cb as char);
            }
        }
    }
    res
}

/// Decrypt ciphertext with a key matrix
///
/// Expects exactly what encrypt emits: an even count of uppercase grid
/// letters. The digraph form is returned, fillers included
///
/// errors: returns Error on odd length, or on characters outside the grid
pub fn decrypt(ciphertext: &str, matrix: &KeyMatrix) -> Result<String, Error> {
    let chars: Vec<char> = ciphertext.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(Error::OddLength);
    }

    let mut res = String::with_capacity(chars.len());
    for pair in chars.chunks(2) {
        if let [a, b] = *pair {
            let (ca, cb) = transform_pair(matrix, a, b, 4)?;
            res.push(ca as char);
            res.push(cb as char);
        }
    }
    Ok(res)
}

// Digraph substitution. Shift 1 encrypts, shift 4 undoes it (mod 5)
fn transform_pair(
    matrix: &KeyMatrix,
    a: char,
    b: char,
    shift: usize,
) -> Result<(u8, u8), Error> {
    let (row_a, col_a) = matrix.position(a).ok_or(Error::InvalidLetter(a))?;
    let (row_b, col_b) = matrix.position(b).ok_or(Error::InvalidLetter(b))?;

    let grid = &matrix.grid;
    let pair = if row_a == row_b {
        (
            grid[row_a][(col_a + shift) % GRID_SIZE],
            grid[row_b][(col_b + shift) % GRID_SIZE],
        )
    } else if col_a == col_b {
        (
            grid[(row_a + shift) % GRID_SIZE][col_a],
            grid[(row_b + shift) % GRID_SIZE][col_b],
        )
    } else {
        (grid[row_a][col_b], grid[row_b][col_a])
    };

    Ok(pair)
}
