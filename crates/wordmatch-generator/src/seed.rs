use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

const SEED_LEN: usize = 32;

/// A 32-byte seed identifying a generated board and its refill stream.
///
/// Seeds render as 64 lowercase hex digits and parse back from that form, so a
/// board can be shared and replayed.
///
/// # Examples
///
/// ```
/// use wordmatch_generator::BoardSeed;
///
/// let seed: BoardSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<BoardSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; SEED_LEN]);

impl BoardSeed {
    /// Creates a seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Derives an independent random stream for `purpose`.
    ///
    /// Streams with different purposes are unrelated even though they come
    /// from the same seed.
    #[must_use]
    pub fn rng(&self, purpose: &str) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(purpose.as_bytes());
        Pcg64::from_seed(hasher.finalize().into())
    }
}

impl From<[u8; SEED_LEN]> for BoardSeed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors raised when parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the input in characters.
        len: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit {
        /// Character offset of the bad digit.
        offset: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != SEED_LEN * 2 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let digits = s
            .chars()
            .enumerate()
            .map(|(offset, found)| {
                found
                    .to_digit(16)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(SeedParseError::InvalidDigit { offset, found })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let mut bytes = [0; SEED_LEN];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
