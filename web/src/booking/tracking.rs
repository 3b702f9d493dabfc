use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

/// A fresh `REF-######` reference. Falls back to a time-seeded generator
/// when the platform has no cryptographic randomness.
pub fn generate_tracking_number() -> String {
    let mut entropy = [0u8; 8];
    if let Err(e) = OsRng.try_fill_bytes(&mut entropy) {
        tracing::warn!(error = %e, "secure randomness unavailable, using fallback generator");
        let seed = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default() as u64;
        SmallRng::seed_from_u64(seed).fill_bytes(&mut entropy);
    }
    format_reference(u64::from_le_bytes(entropy))
}

pub fn format_reference(entropy: u64) -> String {
    format!("REF-{}", 100_000 + entropy % 900_000)
}

pub fn is_tracking_number(value: &str) -> bool {
    value
        .strip_prefix("REF-")
        .map(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
