use secrecy::{ExposeSecret, Secret};

/// Appended to the valid credential to keep its prefix but break its hash.
pub const WRONG_HASH_SUFFIX: &str = "invalid";
/// Does not follow the credential format at all.
pub const MALFORMED_CREDENTIAL: &str = "malformed";

/// The four ways a request can present itself to the dictionary API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialVariant {
    Valid,
    WrongHash,
    Malformed,
    Missing,
}

impl CredentialVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialVariant::Valid => "valid",
            CredentialVariant::WrongHash => "wrong hash",
            CredentialVariant::Malformed => "malformed",
            CredentialVariant::Missing => "missing",
        }
    }
}

impl std::fmt::Display for CredentialVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Credentials {
    valid: Secret<String>,
}

impl Credentials {
    pub fn new(valid: Secret<String>) -> Self {
        Self { valid }
    }

    /// The `Authorization` header value for `variant`, or `None` when no
    /// header should be sent.
    pub fn authorization(&self, variant: CredentialVariant) -> Option<Secret<String>> {
        match variant {
            CredentialVariant::Valid => Some(self.valid.clone()),
            CredentialVariant::WrongHash => Some(Secret::new(format!(
                "{}{}",
                self.valid.expose_secret(),
                WRONG_HASH_SUFFIX
            ))),
            CredentialVariant::Malformed => Some(Secret::new(MALFORMED_CREDENTIAL.to_string())),
            CredentialVariant::Missing => None,
        }
    }
}
