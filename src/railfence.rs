use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Encrypt text by zigzag transposition across rails
///
/// Characters are written diagonally down and up across the rails,
/// then the rails are read off top to bottom.
/// One rail (or fewer) and empty text are identity
pub fn encrypt(text: &str, rails: usize) -> String {
    if rails <= 1 || text.is_empty() {
        return String::from(text);
    }

    let mut fence = vec![String::new(); rails];
    for (c, row) in text.chars().zip(rail_rows(text.chars().count(), rails)) {
        fence[row].push(c);
    }

    let mut res = String::with_capacity(text.len());
    for rail in fence.iter() {
        res.push_str(rail);
    }
    res
}

/// Decrypt text encrypted by zigzag transposition
///
/// Replays the zigzag once to find how many characters each rail owns,
/// slices the ciphertext into rails, then replays again consuming
/// rail heads in visit order
pub fn decrypt(cipher: &str, rails: usize) -> String {
    if rails <= 1 || cipher.is_empty() {
        return String::from(cipher);
    }

    let chars: Vec<char> = cipher.chars().collect();
    let rows = rail_rows(chars.len(), rails);

    let mut counts = vec![0_usize; rails];
    for &row in rows.iter() {
        counts[row] += 1;
    }

    // counts sum to the cipher length, one entry per character
    let mut fence: Vec<&[char]> = Vec::with_capacity(rails);
    let mut rest = &chars[..];
    for &count in counts.iter() {
        let (head, tail) = rest.split_at(count.min(rest.len()));
        fence.push(head);
        rest = tail;
    }

    let mut pos = vec![0_usize; rails];
    let mut res = String::with_capacity(chars.len());
    for &row in rows.iter() {
        if pos[row] < fence[row].len() {
            res.push(fence[row][pos[row]]);
            pos[row] += 1;
        }
    }
    res
}

/// Rail index visited at each character position
fn rail_rows(len: usize, rails: usize) -> Vec<usize> {
    let mut rows = Vec::with_capacity(len);
    let mut row = 0_usize;
    let mut descending = true;

    for _ in 0..len {
        if row == 0 {
            descending = true;
        } else if row == rails - 1 {
            descending = false;
        }

        rows.push(row);
        row = if descending { row + 1 } else { row - 1 };
    }
    rows
}
