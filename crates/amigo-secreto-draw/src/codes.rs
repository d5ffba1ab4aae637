//! Access code generation.

use std::collections::HashSet;

use crate::error::{DrawError, Result};

/// Characters an access code is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length used when the caller has no preference.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Hands out random uppercase alphanumeric codes, never the same one twice.
#[derive(Debug)]
pub struct CodeGenerator {
    length: usize,
    used: HashSet<String>,
}

impl CodeGenerator {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(DrawError::InvalidCodeLength);
        }
        Ok(Self {
            length,
            used: HashSet::new(),
        })
    }

    /// Number of distinct codes of this length, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        u32::try_from(self.length)
            .ok()
            .and_then(|len| ALPHABET.len().checked_pow(len))
            .unwrap_or(usize::MAX)
    }

    /// Codes handed out so far.
    pub fn used(&self) -> usize {
        self.used.len()
    }

    pub fn generate(&mut self, rng: &mut fastrand::Rng) -> Result<String> {
        if self.used.len() >= self.capacity() {
            return Err(DrawError::CodesExhausted {
                used: self.used.len(),
                length: self.length,
            });
        }

        loop {
            let code: String = (0..self.length)
                .map(|_| ALPHABET[rng.usize(..ALPHABET.len())] as char)
                .collect();
            if self.used.insert(code.clone()) {
                return Ok(code);
            }
        }
    }
}
