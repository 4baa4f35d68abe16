#![no_std]

extern crate alloc;

pub mod bytes;
pub mod caesar;
pub mod encoding;
pub mod hybrid;
pub mod modmath;
pub mod otp;
pub mod playfair;
pub mod railfence;
pub mod rsa;
pub mod vigenere;
