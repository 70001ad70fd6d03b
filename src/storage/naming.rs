//! Collision-safe naming
//!
//! Produces candidate names for a fetched file. The first candidate is the
//! requested name itself; later ones are mutations of it that the caller
//! tries until one does not exist.

use rand::Rng;
use serde::Deserialize;

/// How a colliding name is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Append one random decimal digit to the base on every collision,
    /// chaining onto the already-modified base: `report.txt`,
    /// `report7.txt`, `report72.txt`, ...
    RandomDigit,
    /// `report.txt`, `report1.txt`, `report2.txt`, ...
    Counter,
}

/// A filename split at its first `.` into base and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    base: String,
    ext: Option<String>,
}

impl TargetName {
    pub fn parse(filename: &str) -> Self {
        match filename.split_once('.') {
            Some((base, ext)) => Self {
                base: base.to_string(),
                ext: Some(ext.to_string()),
            },
            None => Self {
                base: filename.to_string(),
                ext: None,
            },
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    fn with_base(&self, base: &str) -> String {
        match &self.ext {
            Some(ext) => format!("{}.{}", base, ext),
            None => base.to_string(),
        }
    }

    pub fn file_name(&self) -> String {
        self.with_base(&self.base)
    }
}

/// Endless iterator of candidate names for one target.
pub struct Candidates<'a, R: Rng> {
    original: TargetName,
    current: TargetName,
    policy: NamingPolicy,
    rng: &'a mut R,
    attempt: usize,
}

impl<'a, R: Rng> Candidates<'a, R> {
    pub fn new(filename: &str, policy: NamingPolicy, rng: &'a mut R) -> Self {
        let original = TargetName::parse(filename);
        Self {
            current: original.clone(),
            original,
            policy,
            rng,
            attempt: 0,
        }
    }
}

impl<R: Rng> Iterator for Candidates<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let attempt = self.attempt;
        self.attempt += 1;

        if attempt == 0 {
            return Some(self.original.file_name());
        }

        let name = match self.policy {
            NamingPolicy::RandomDigit => {
                let digit: u8 = self.rng.gen_range(0..10);
                self.current.base.push(char::from(b'0' + digit));
                self.current.file_name()
            }
            NamingPolicy::Counter => self
                .original
                .with_base(&format!("{}{}", self.original.base, attempt)),
        };
        Some(name)
    }
}
