// src/generators/password.rs
use std::collections::HashSet;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use thiserror::Error;

use crate::models::GenerationOptions;

const DIGITS: &str = "0123456789";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters that are easy to confuse at a glance.
const SIMILAR_CHARACTERS: &str = "iloIO01";

/// Reference run for the sequential-characters check: any 3-character window
/// of a candidate that occurs verbatim in this string rejects the whole
/// candidate.
const SEQUENTIAL_REFERENCE: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws attempted per password before giving up on the constraints.
const MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no characters available for password generation")]
    EmptyAlphabet,

    #[error("could not generate a password satisfying the requested constraints")]
    ConstraintUnsatisfiable,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Derive the set of characters eligible for sampling.
///
/// Classes are appended in a fixed order: digits, lowercase, uppercase,
/// custom symbols. `begin_with_letter` without numbers or symbols replaces
/// the result with the full letter set, both cases, regardless of the case
/// toggles. The similar-character strip runs last.
pub fn build_alphabet(options: &GenerationOptions) -> Vec<char> {
    let mut characters = String::new();

    if options.include_numbers {
        characters.push_str(DIGITS);
    }
    if options.include_lowercase {
        characters.push_str(LOWERCASE);
    }
    if options.include_uppercase {
        characters.push_str(UPPERCASE);
    }
    if options.include_symbols {
        characters.push_str(&options.custom_symbols);
    }

    if options.begin_with_letter && !(options.include_numbers || options.include_symbols) {
        characters = format!("{LOWERCASE}{UPPERCASE}");
    }

    if options.no_similar_characters {
        characters.retain(|c| !SIMILAR_CHARACTERS.contains(c));
    }

    characters.chars().collect()
}

fn sample<R: Rng>(rng: &mut R, alphabet: &[char], length: usize) -> String {
    let dist = Uniform::from(0..alphabet.len());
    (0..length).map(|_| alphabet[dist.sample(rng)]).collect()
}

fn has_duplicates(candidate: &str) -> bool {
    let mut seen = HashSet::new();
    candidate.chars().any(|c| !seen.insert(c))
}

fn has_sequential_run(candidate: &str) -> bool {
    let chars: Vec<char> = candidate.chars().collect();
    chars.windows(3).any(|window| {
        let run: String = window.iter().collect();
        SEQUENTIAL_REFERENCE.contains(run.as_str())
    })
}

/// Generate a single password.
///
/// Rejection sampling: a candidate violating the duplicate or sequential
/// constraint is discarded and the whole draw repeated, up to `MAX_ATTEMPTS`
/// times before failing with `ConstraintUnsatisfiable`.
pub fn generate_one<R: Rng>(rng: &mut R, options: &GenerationOptions) -> Result<String> {
    let alphabet = build_alphabet(options);
    if alphabet.is_empty() {
        return Err(GeneratorError::EmptyAlphabet);
    }

    // Pigeonhole: a duplicate-free draw longer than the alphabet can never
    // succeed, so fail before sampling anything.
    if options.no_duplicate_characters && options.length > alphabet.len() {
        return Err(GeneratorError::ConstraintUnsatisfiable);
    }

    for _ in 0..MAX_ATTEMPTS {
        let candidate = sample(rng, &alphabet, options.length);

        if options.no_duplicate_characters && has_duplicates(&candidate) {
            continue;
        }
        if options.no_sequential_characters && has_sequential_run(&candidate) {
            continue;
        }
        return Ok(candidate);
    }

    Err(GeneratorError::ConstraintUnsatisfiable)
}

/// Generate `options.quantity` passwords, each drawn independently.
///
/// There is no cross-password constraint; two passwords in the same batch
/// may be equal.
pub fn generate_batch<R: Rng>(rng: &mut R, options: &GenerationOptions) -> Result<Vec<String>> {
    (0..options.quantity)
        .map(|_| generate_one(rng, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn passwords_have_requested_length() {
        let options = GenerationOptions {
            length: 32,
            ..Default::default()
        };
        let password = generate_one(&mut rng(), &options).unwrap();
        assert_eq!(password.chars().count(), 32);
    }

    #[test]
    fn characters_come_from_derived_alphabet() {
        let options = GenerationOptions {
            include_numbers: true,
            include_lowercase: false,
            include_uppercase: false,
            ..Default::default()
        };
        let password = generate_one(&mut rng(), &options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn custom_symbols_join_the_alphabet() {
        let options = GenerationOptions {
            include_numbers: false,
            include_lowercase: false,
            include_uppercase: false,
            include_symbols: true,
            custom_symbols: "!@#".to_string(),
            ..Default::default()
        };
        let password = generate_one(&mut rng(), &options).unwrap();
        assert!(password.chars().all(|c| "!@#".contains(c)));
    }

    #[test]
    fn begin_with_letter_overrides_case_toggles() {
        let options = GenerationOptions {
            include_numbers: false,
            include_lowercase: true,
            include_uppercase: false,
            begin_with_letter: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&options);
        assert_eq!(alphabet.len(), 52);
        assert!(alphabet.iter().all(|c| c.is_ascii_alphabetic()));
        assert!(alphabet.contains(&'a'));
        assert!(alphabet.contains(&'Z'));
    }

    #[test]
    fn begin_with_letter_is_additive_only_without_numbers_and_symbols() {
        let options = GenerationOptions {
            include_numbers: true,
            include_lowercase: true,
            include_uppercase: false,
            begin_with_letter: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&options);
        // Numbers are included, so the letter override does not fire.
        assert!(alphabet.contains(&'5'));
        assert!(!alphabet.contains(&'Z'));
    }

    #[test]
    fn similar_characters_are_stripped() {
        let options = GenerationOptions {
            no_similar_characters: true,
            ..Default::default()
        };
        let alphabet = build_alphabet(&options);
        assert_eq!(alphabet.len(), 62 - 7);
        for c in SIMILAR_CHARACTERS.chars() {
            assert!(!alphabet.contains(&c), "{c} should have been stripped");
        }
    }

    #[test]
    fn empty_alphabet_is_an_error() {
        let options = GenerationOptions {
            include_numbers: false,
            include_lowercase: false,
            include_uppercase: false,
            ..Default::default()
        };
        assert!(matches!(
            generate_one(&mut rng(), &options),
            Err(GeneratorError::EmptyAlphabet)
        ));
    }

    #[test]
    fn no_duplicate_yields_distinct_characters() {
        let options = GenerationOptions {
            length: 10,
            include_numbers: true,
            include_lowercase: false,
            include_uppercase: false,
            no_duplicate_characters: true,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..50 {
            let password = generate_one(&mut rng, &options).unwrap();
            let distinct: HashSet<char> = password.chars().collect();
            assert_eq!(distinct.len(), password.chars().count());
        }
    }

    #[test]
    fn duplicate_constraint_longer_than_alphabet_fails() {
        let options = GenerationOptions {
            length: 11,
            include_numbers: true,
            include_lowercase: false,
            include_uppercase: false,
            no_duplicate_characters: true,
            ..Default::default()
        };
        assert!(matches!(
            generate_one(&mut rng(), &options),
            Err(GeneratorError::ConstraintUnsatisfiable)
        ));
    }

    #[test]
    fn sequential_runs_are_rejected() {
        let options = GenerationOptions {
            length: 8,
            no_sequential_characters: true,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..200 {
            let password = generate_one(&mut rng, &options).unwrap();
            assert!(!has_sequential_run(&password), "{password}");
        }
    }

    #[test]
    fn sequential_detection_spans_case_and_digit_boundaries() {
        // The reference run is lowercase, then uppercase, then digits.
        assert!(has_sequential_run("qabcq"));
        assert!(has_sequential_run("yzA"));
        assert!(has_sequential_run("YZ0"));
        assert!(has_sequential_run("789"));
        assert!(!has_sequential_run("a1b2c3"));
        assert!(!has_sequential_run("ba9xw"));
        // The wrap from digits back to lowercase is not sequential.
        assert!(!has_sequential_run("89a"));
    }

    #[test]
    fn batch_size_matches_quantity() {
        let options = GenerationOptions {
            quantity: 5,
            ..Default::default()
        };
        let passwords = generate_batch(&mut rng(), &options).unwrap();
        assert_eq!(passwords.len(), 5);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let options = GenerationOptions::default();
        let first = generate_batch(&mut StdRng::seed_from_u64(7), &options).unwrap();
        let second = generate_batch(&mut StdRng::seed_from_u64(7), &options).unwrap();
        assert_eq!(first, second);
    }
}
