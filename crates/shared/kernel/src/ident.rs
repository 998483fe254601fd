//! Per-deployment identifiers.

use crate::error::{KernelError, KernelErrorExt};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Returns `bytes` bytes from the OS CSPRNG, encoded as unpadded URL-safe base64.
///
/// The result is safe to embed in URLs and single-quoted source literals as-is.
///
/// # Errors
/// Returns [`KernelError::Entropy`] when the system RNG fails. A production build must not
/// fall back to a predictable value.
pub fn unique_id(bytes: usize) -> Result<String, KernelError> {
    let mut buf = vec![0u8; bytes];
    getrandom::fill(&mut buf).context("Failed to generate deployment identifier")?;
    Ok(URL_SAFE_NO_PAD.encode(&buf))
}

/// Length of [`unique_id`] output for a given entropy size.
#[must_use]
pub const fn encoded_len(bytes: usize) -> usize {
    (bytes * 4).div_ceil(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_matches_entropy_size() {
        for bytes in [1, 16, 32, 64] {
            let id = unique_id(bytes).unwrap();
            assert_eq!(id.len(), encoded_len(bytes));
            assert_eq!(URL_SAFE_NO_PAD.decode(&id).unwrap().len(), bytes);
        }
    }

    #[test]
    fn ids_are_url_safe() {
        let id = unique_id(64).unwrap();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(unique_id(32).unwrap(), unique_id(32).unwrap());
    }
}
