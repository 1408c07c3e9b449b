//! Fake value source.
//!
//! The pipeline never touches an RNG directly; every random primitive it
//! needs (names, words, dates, uniform picks) comes through the
//! [`FakeSource`] trait so tests can seed it deterministically and callers
//! can substitute their own source.

use ahash::AHashSet;
use chrono::{Duration, NaiveDateTime};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Email domains used when composing addresses.
const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// Supplier of primitive random values for the synthesizers.
pub trait FakeSource {
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;

    /// Compose an email unique within this source's lifetime.
    ///
    /// Returns `None` when the composed address collides with one handed
    /// out earlier; the caller decides whether to clear the tracker and
    /// retry.
    fn unique_email(&mut self, first: &str, last: &str) -> Option<String>;

    /// Forget all previously handed-out unique values.
    fn clear_unique(&mut self);

    fn company(&mut self) -> String;
    fn word(&mut self) -> String;

    /// A capitalized sentence of roughly `words` words, ending in a period.
    fn sentence(&mut self, words: usize) -> String;

    /// Uniform datetime in `[start, end]`.
    fn datetime_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime;

    /// Uniform integer in `[min, max]`.
    fn int_range(&mut self, min: i64, max: i64) -> i64;

    /// Uniform index into a collection of length `len` (`len > 0`).
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform price in `[min, max]`, rounded to 2 decimal places.
    fn price(&mut self, min: f64, max: f64) -> f64;
}

/// Pick a uniformly-random element from a non-empty slice.
pub fn pick<'a, T, F: FakeSource + ?Sized>(src: &mut F, items: &'a [T]) -> &'a T {
    &items[src.pick_index(items.len())]
}

/// Default [`FakeSource`] backed by the `fake` crate and a seeded ChaCha8
/// stream, so identical seeds reproduce identical datasets.
pub struct FakerSource {
    rng: ChaCha8Rng,
    used_emails: AHashSet<String>,
}

impl FakerSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            used_emails: AHashSet::new(),
        }
    }
}

impl FakeSource for FakerSource {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn unique_email(&mut self, first: &str, last: &str) -> Option<String> {
        let domain = EMAIL_DOMAINS[self.rng.random_range(0..EMAIL_DOMAINS.len())];
        let num: u32 = self.rng.random_range(1..1000);
        let email = format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            num,
            domain
        );
        if self.used_emails.insert(email.clone()) {
            Some(email)
        } else {
            None
        }
    }

    fn clear_unique(&mut self) {
        self.used_emails.clear();
    }

    fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn sentence(&mut self, words: usize) -> String {
        Sentence(words..words + 1).fake_with_rng(&mut self.rng)
    }

    fn datetime_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
        let span = (end - start).num_seconds().max(0);
        start + Duration::seconds(self.rng.random_range(0..=span))
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..max);
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        let mut a = FakerSource::new(7);
        let mut b = FakerSource::new(7);
        assert_eq!(a.first_name(), b.first_name());
        assert_eq!(a.int_range(1, 100), b.int_range(1, 100));
        assert_eq!(a.sentence(6), b.sentence(6));
    }

    #[test]
    fn unique_email_rejects_repeats() {
        let mut src = FakerSource::new(1);
        let email = src.unique_email("Ada", "Lovelace").unwrap();
        // Exhaust the small suffix space until the exact address repeats.
        let mut collided = false;
        for _ in 0..100_000 {
            match src.unique_email("Ada", "Lovelace") {
                Some(_) => continue,
                None => {
                    collided = true;
                    break;
                }
            }
        }
        assert!(collided, "expected a collision in a bounded address space");
        src.clear_unique();
        assert!(src.unique_email("Ada", "Lovelace").is_some());
        assert!(!email.is_empty());
    }
}
