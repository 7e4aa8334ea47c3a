use crate::domain::ports::CredentialVerifier;

/// Compares the stored password with the presented one verbatim.
///
/// Passwords are persisted unhashed; this adapter exists so a hashing
/// verifier can replace it without changes to the domain service.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialVerifier for PlaintextCredentials {
    fn verify(&self, stored: &str, presented: &str) -> bool {
        stored == presented
    }
}
