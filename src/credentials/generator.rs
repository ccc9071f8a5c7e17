//! Random admin password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::policy::{DIGITS, GENERATED_LENGTH, LOWERCASE, SPECIAL, UPPERCASE};

/// Generate a policy-compliant password using the operating system's CSPRNG.
pub fn generate() -> String {
    generate_with(&mut OsRng)
}

/// Generate a policy-compliant password from the given secure RNG.
///
/// One character from each class is placed first, the remaining positions are
/// drawn uniformly from the union of all classes, and the whole sequence is
/// then shuffled so the guaranteed characters carry no positional bias.
pub fn generate_with<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> String {
    let all = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();

    let mut chars: Vec<char> = Vec::with_capacity(GENERATED_LENGTH);
    for class in [UPPERCASE, LOWERCASE, DIGITS, SPECIAL] {
        chars.push(pick(class, rng));
    }
    while chars.len() < GENERATED_LENGTH {
        chars.push(pick(&all, rng));
    }

    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Uniformly pick one character from an ASCII alphabet.
fn pick<R: Rng + ?Sized>(alphabet: &str, rng: &mut R) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
