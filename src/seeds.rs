//! Seed management for world generation.
//!
//! Elevation and moisture are sampled from two independent noise fields, each
//! seeded by its own string. Holding one seed fixed while varying the other
//! regenerates one field without disturbing the other.

use rand::Rng;

/// Maximum accepted seed length after trimming.
pub const MAX_SEED_LEN: usize = 100;

/// Number of digits in a randomly generated seed.
const RANDOM_SEED_DIGITS: usize = 30;

/// Seed pair for the two noise fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSeeds {
    pub elevation: String,
    pub moisture: String,
}

/// Why a seed string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// Empty, or nothing left after trimming whitespace.
    Empty,
    /// Longer than [`MAX_SEED_LEN`] characters.
    TooLong { len: usize },
    /// Contains a character outside [a-zA-Z0-9].
    NotAlphanumeric { ch: char },
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Empty => write!(f, "seed is empty"),
            SeedError::TooLong { len } => {
                write!(f, "seed is {} characters long, maximum is {}", len, MAX_SEED_LEN)
            }
            SeedError::NotAlphanumeric { ch } => {
                write!(f, "seed contains non-alphanumeric character {:?}", ch)
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Validate a raw seed string and return its canonical (trimmed) form.
///
/// Accepts 1 to [`MAX_SEED_LEN`] ASCII alphanumeric characters; surrounding
/// whitespace is stripped rather than rejected.
pub fn validate_seed(raw: &str) -> Result<String, SeedError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SeedError::Empty);
    }
    if trimmed.chars().count() > MAX_SEED_LEN {
        return Err(SeedError::TooLong { len: trimmed.chars().count() });
    }
    if let Some(ch) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(SeedError::NotAlphanumeric { ch });
    }
    Ok(trimmed.to_string())
}

/// Generate a random seed: thirty decimal digits.
///
/// Always passes [`validate_seed`]. Takes the RNG as a parameter so callers
/// with a fixed RNG get reproducible seeds.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RANDOM_SEED_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

impl WorldSeeds {
    /// Validate and store an explicit seed pair.
    pub fn new(elevation: &str, moisture: &str) -> Result<Self, SeedError> {
        Ok(Self {
            elevation: validate_seed(elevation)?,
            moisture: validate_seed(moisture)?,
        })
    }

    /// Fill in missing seeds with random ones; validate the supplied ones.
    pub fn resolve(elevation: Option<&str>, moisture: Option<&str>) -> Result<Self, SeedError> {
        let mut rng = rand::thread_rng();
        Ok(Self {
            elevation: match elevation {
                Some(raw) => validate_seed(raw)?,
                None => random_seed(&mut rng),
            },
            moisture: match moisture {
                Some(raw) => validate_seed(raw)?,
                None => random_seed(&mut rng),
            },
        })
    }

    /// A fully random seed pair.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            elevation: random_seed(&mut rng),
            moisture: random_seed(&mut rng),
        }
    }
}

impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "elevation: {}, moisture: {}", self.elevation, self.moisture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(validate_seed("  abc123  ").unwrap(), "abc123");
        assert_eq!(validate_seed("\tXYZ\n").unwrap(), "XYZ");
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(validate_seed(""), Err(SeedError::Empty));
        assert_eq!(validate_seed("   "), Err(SeedError::Empty));
    }

    #[test]
    fn test_validate_length_limit() {
        let max = "a".repeat(100);
        assert_eq!(validate_seed(&max).unwrap(), max);
        let over = "a".repeat(101);
        assert_eq!(validate_seed(&over), Err(SeedError::TooLong { len: 101 }));
    }

    #[test]
    fn test_validate_rejects_non_alphanumeric() {
        assert_eq!(
            validate_seed("abc!23"),
            Err(SeedError::NotAlphanumeric { ch: '!' })
        );
        assert_eq!(
            validate_seed("with space"),
            Err(SeedError::NotAlphanumeric { ch: ' ' })
        );
        // Unicode letters are outside the accepted alphabet.
        assert_eq!(
            validate_seed("héllo"),
            Err(SeedError::NotAlphanumeric { ch: 'é' })
        );
    }

    #[test]
    fn test_random_seed_is_thirty_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let seed = random_seed(&mut rng);
        assert_eq!(seed.len(), 30);
        assert!(seed.chars().all(|c| c.is_ascii_digit()));
        assert!(validate_seed(&seed).is_ok());
    }

    #[test]
    fn test_random_seed_reproducible_per_rng() {
        let a = random_seed(&mut ChaCha8Rng::seed_from_u64(42));
        let b = random_seed(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
        let c = random_seed(&mut ChaCha8Rng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_resolve_keeps_supplied_seeds() {
        let seeds = WorldSeeds::resolve(Some("islands42"), None).unwrap();
        assert_eq!(seeds.elevation, "islands42");
        assert_eq!(seeds.moisture.len(), 30);

        let seeds = WorldSeeds::resolve(None, Some("  rain7  ")).unwrap();
        assert_eq!(seeds.moisture, "rain7");
    }

    #[test]
    fn test_resolve_propagates_validation_errors() {
        assert!(WorldSeeds::resolve(Some("bad seed"), None).is_err());
        assert!(WorldSeeds::resolve(None, Some("")).is_err());
    }

    #[test]
    fn test_new_validates_both() {
        let seeds = WorldSeeds::new("aaa", "bbb").unwrap();
        assert_eq!(seeds.elevation, "aaa");
        assert_eq!(seeds.moisture, "bbb");
        assert!(WorldSeeds::new("aaa", "b b").is_err());
    }
}
