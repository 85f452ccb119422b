use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::thread;

use strong_password::generators::password::PASSWORD_LENGTH;
use strong_password::{generate_password, is_password_strong, PasswordGenerator};

#[test]
fn generated_passwords_are_strong_and_sixteen_long() {
    for _ in 0..500 {
        let password = generate_password();
        assert_eq!(password.chars().count(), PASSWORD_LENGTH);
        assert!(is_password_strong(&password), "{} should be strong", password);
    }
}

#[test]
fn no_duplicates_in_a_thousand_draws() {
    let drawn: HashSet<String> = (0..1000).map(|_| generate_password()).collect();
    assert_eq!(drawn.len(), 1000);
}

#[test]
fn two_calls_differ() {
    assert_ne!(generate_password(), generate_password());
}

#[test]
fn generated_passwords_use_only_policy_alphabets() {
    let mut generator = PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(2024));
    for _ in 0..200 {
        let password = generator.generate_password();
        for c in password.chars() {
            let known = strong_password::policy::SPECIAL_CHARACTERS.contains(&c)
                || c.is_ascii_digit()
                || strong_password::policy::LETTERS.contains(&c.to_ascii_lowercase());
            assert!(known, "unexpected character {:?} in {}", c, password);
        }
    }
}

#[test]
fn bounded_generation_succeeds_quickly() {
    let mut generator =
        PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(99)).with_max_attempts(50);
    for _ in 0..100 {
        let generated = generator.try_generate().unwrap();
        assert!(generated.attempts <= 50);
        assert!(generator.is_password_strong(&generated.password));
    }
}

#[test]
fn generation_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (0..50).map(|_| generate_password()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for password in handle.join().unwrap() {
            assert!(is_password_strong(&password));
            seen.insert(password);
        }
    }
    assert_eq!(seen.len(), 400);
}
