use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

/// Generate a 256-bit cryptographically random token, hex-encoded.
///
/// For session tokens that carry no claims; verification is a store
/// lookup of the exact value rather than a signature check.
pub fn random_opaque_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
