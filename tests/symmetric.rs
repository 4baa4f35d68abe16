use toycrypt::{
    caesar, encoding, otp,
    playfair::{self, KeyMatrix},
    railfence, vigenere,
};

#[test]
fn caesar_shift_vectors() {
    assert_eq!(caesar::encrypt("HELLO", 3), "KHOOR");
    assert_eq!(caesar::decrypt("KHOOR", 3), "HELLO");

    // ROT13 applied twice is the identity
    let rot13 = caesar::encrypt("Hello, World!", 13);
    assert_eq!(rot13, "Uryyb, Jbeyq!");
    assert_eq!(caesar::encrypt(&rot13, 13), "Hello, World!");
}

#[test]
fn vigenere_running_key_vectors() {
    // the key advances on spaces too, unlike the letters-only variant
    let ciphertext = vigenere::encrypt("ATTACK AT DAWN", "LEMON");
    assert_eq!(ciphertext, "LXFOPV MH OEIB");
    assert_eq!(vigenere::decrypt(&ciphertext, "LEMON"), "ATTACK AT DAWN");
}

#[test]
fn railfence_zigzag_vectors() {
    let ciphertext = railfence::encrypt("WEAREDISCOVEREDFLEEATONCE", 3);
    assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
    assert_eq!(
        railfence::decrypt(&ciphertext, 3),
        "WEAREDISCOVEREDFLEEATONCE"
    );
}

#[test]
fn playfair_digraph_vectors() {
    let matrix = KeyMatrix::new("MONARCHY");
    let ciphertext = playfair::encrypt("INSTRUMENTS", &matrix);
    assert_eq!(ciphertext, "GATLMZCLRQXA");

    // decryption returns the prepared digraph form, filler included
    assert_eq!(
        playfair::decrypt(&ciphertext, &matrix).unwrap(),
        "INSTRUMENTSX"
    );

    let matrix = KeyMatrix::new("PLAYFAIREXAMPLE");
    assert_eq!(
        playfair::encrypt("HIDETHEGOLDINTHETREESTUMP", &matrix),
        "BMODZBXDNABEKUDMUIXMMOUVIF"
    );
}

#[test]
fn one_time_pad_round_trip() {
    let mut rng = rand::thread_rng();
    let plaintext = b"cipher toolkit";
    let key = otp::generate_random_key(&mut rng, plaintext.len());

    let ciphertext = otp::encrypt(plaintext, &key).unwrap();
    assert_eq!(otp::decrypt(&ciphertext, &key).unwrap()[..], plaintext[..]);

    // a pad one byte short is rejected
    assert_eq!(
        otp::encrypt(plaintext, &key[..plaintext.len() - 1]),
        Err(otp::Error::KeyLength)
    );
}

#[test]
fn pad_ciphertext_displays_as_hex() {
    let ciphertext = otp::encrypt(b"HELLO", b"XMCKL").unwrap();
    let hex = encoding::to_hex(&ciphertext);

    assert_eq!(hex, "10080f0703");
    assert_eq!(encoding::from_hex(&hex).unwrap()[..], ciphertext[..]);
}

#[test]
fn chained_classical_ciphers() {
    let plaintext = "THE EAGLE HAS LANDED";

    let stage_one = caesar::encrypt(plaintext, 7);
    let stage_two = vigenere::encrypt(&stage_one, "RELAY");
    let stage_three = railfence::encrypt(&stage_two, 4);

    let back_two = railfence::decrypt(&stage_three, 4);
    let back_one = vigenere::decrypt(&back_two, "RELAY");
    assert_eq!(caesar::decrypt(&back_one, 7), plaintext);
}
