/// Decides whether a presented password matches the stored one.
///
/// Kept behind a port so the plaintext comparison can be swapped for a
/// hashing scheme without touching the service.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, stored: &str, presented: &str) -> bool;
}
