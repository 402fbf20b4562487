//! Verification code value for SMS-based authentication.

use std::fmt;

use rand::Rng;

/// Length of the verification code
pub const CODE_LENGTH: usize = 4;

/// A one-time verification code delivered to a phone number via SMS.
///
/// The code is a string of exactly [`CODE_LENGTH`] decimal digits, leading
/// zeros preserved. It is a transient value: no uniqueness, expiry, or
/// persistence semantics are enforced here. The caller that requested the
/// dispatch owns any storage and comparison step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Generates a new random verification code.
    ///
    /// Each digit position is an independent draw from a uniform
    /// distribution over 0-9, concatenated in draw order. The per-thread
    /// generator keeps concurrent invocations from sharing mutable state.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let digits = (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(digits)
    }

    /// Returns the code digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the code, returning the digit string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_code_format() {
        // Test multiple times to ensure consistency
        for _ in 0..100 {
            let code = VerificationCode::generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_leading_zeros_are_preserved() {
        // Draws are concatenated digit by digit, so "0042"-style codes keep
        // their full width. Sample until a leading zero shows up.
        let mut saw_leading_zero = false;
        for _ in 0..5_000 {
            let code = VerificationCode::generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            if code.as_str().starts_with('0') {
                saw_leading_zero = true;
                break;
            }
        }
        assert!(saw_leading_zero, "no leading-zero code in 5000 samples");
    }

    #[test]
    fn test_code_uniqueness() {
        // Generate multiple codes and check they're not all the same
        let codes: Vec<String> = (0..100)
            .map(|_| VerificationCode::generate().into_string())
            .collect();

        let unique_count = codes.iter().collect::<HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_digit_distribution_is_roughly_uniform() {
        // Statistical check, not exact equality: with 5000 samples each
        // digit should land near 500 occurrences per position. The bounds
        // sit more than nine standard deviations out.
        const SAMPLES: usize = 5_000;
        let mut counts = [[0usize; 10]; CODE_LENGTH];

        for _ in 0..SAMPLES {
            let code = VerificationCode::generate();
            for (position, c) in code.as_str().chars().enumerate() {
                let digit = (c as u8 - b'0') as usize;
                counts[position][digit] += 1;
            }
        }

        for position in 0..CODE_LENGTH {
            for digit in 0..10 {
                let count = counts[position][digit];
                assert!(
                    (350..=650).contains(&count),
                    "digit {} at position {} occurred {} times in {} samples",
                    digit,
                    position,
                    count,
                    SAMPLES
                );
            }
        }
    }

    #[test]
    fn test_display_matches_digits() {
        let code = VerificationCode::generate();
        assert_eq!(code.to_string(), code.as_str());
    }
}
