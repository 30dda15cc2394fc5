use std::{
    collections::hash_map::DefaultHasher,
    fmt::Debug,
    hash::{Hash, Hasher},
};

/// Environment variables checked, in order, for a GitHub bearer token.
pub const CREDENTIAL_VARIABLES: [&str; 3] = ["GITHUB_TOKEN", "GH_TOKEN", "GITHUB_API_TOKEN"];

/// A GitHub bearer token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    /// Creates a new `Credential`, or `None` if the token is blank.
    pub fn new(token: &str) -> Option<Self> {
        let token = token.trim();
        (!token.is_empty()).then(|| Self(token.to_string()))
    }

    /// Retrieves the raw token.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// A per-process digest of the token, used to partition cache keys without embedding the secret.
    pub fn fingerprint(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    /// Creates a dummy `Credential` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self("ghp_dummy".to_string())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(***)")
    }
}

/// Resolves the bearer credential from the environment.
///
/// Absence is an expected outcome: callers degrade the features that need a token.
pub struct CredentialResolver;

impl CredentialResolver {
    /// Resolves the credential from the process environment.
    pub fn resolve() -> Option<Credential> {
        Self::resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves the credential with the given variable lookup, first non-empty wins.
    pub fn resolve_with<F>(lookup: F) -> Option<Credential>
    where
        F: Fn(&str) -> Option<String>,
    {
        CREDENTIAL_VARIABLES
            .iter()
            .find_map(|name| lookup(name).and_then(|value| Credential::new(&value)))
    }
}
