//! Constant-time verification of candidate buffers against a reference.

use constant_time_eq::constant_time_eq;

/// Checks every candidate against `reference` in constant time.
///
/// Returns `true` iff the candidate list is non-empty and every candidate
/// matches the reference. Every candidate is compared even after a mismatch
/// is found, so the running time does not reveal which candidate failed or
/// where it diverged.
///
/// # Example
///
/// ```
/// use tagwire::verify::verify_all;
///
/// let mac: &[u8] = &[0x11, 0x22, 0x33];
/// let forged: &[u8] = &[0x11, 0x22, 0x34];
///
/// assert!(verify_all(mac, &[mac, mac]));
/// assert!(!verify_all(mac, &[mac, forged]));
/// assert!(!verify_all(mac, &[]));
/// ```
pub fn verify_all(reference: &[u8], candidates: &[&[u8]]) -> bool {
    let mut ok = !candidates.is_empty();
    for candidate in candidates {
        ok &= constant_time_eq(reference, candidate);
    }
    ok
}
