pub mod plaintext;

pub use plaintext::PlaintextCredentials;
