//! Short code generation.
//!
//! Codes are drawn from the OS CSPRNG over a 64-character URL-safe alphabet,
//! so every character carries 6 bits of entropy. At the default length of 21
//! that is 126 bits: collisions are negligible but still handled by the
//! caller.

/// URL-safe base64 alphabet. Exactly 64 symbols so a 6-bit mask maps uniformly.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Default code length.
pub const DEFAULT_CODE_LENGTH: usize = 21;

/// Generates a cryptographically secure random short code of `length`
/// characters.
///
/// # Errors
///
/// Returns the underlying [`getrandom::Error`] if the system random number
/// generator is unavailable.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(21)?;
/// assert_eq!(code.len(), 21);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> Result<String, getrandom::Error> {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer)?;

    Ok(buffer
        .into_iter()
        .map(|byte| ALPHABET[(byte & 63) as usize] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn test_generate_code_has_default_length() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        assert_eq!(code.len(), 21);
    }

    #[test]
    fn test_generate_code_custom_length() {
        assert_eq!(generate_code(8).unwrap().len(), 8);
        assert_eq!(generate_code(64).unwrap().len(), 64);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        assert!(
            code.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(DEFAULT_CODE_LENGTH).unwrap());
        }

        assert_eq!(codes.len(), 1000);
    }
}
