use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::resolve_profile_name;

const REDACTED: &str = "<redacted>";

/// A cloud account as handed over by whatever fetched the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Empty means unset.
    #[serde(default)]
    pub alias: String,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alias: String::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}

#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CloudCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl CloudCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.into(),
        }
    }
}

impl fmt::Debug for CloudCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudCredentials")
            .field("access_key_id", &REDACTED)
            .field("secret_access_key", &REDACTED)
            .field("session_token", &REDACTED)
            .finish()
    }
}

/// One profile worth of credentials, ready to be written to the document.
#[derive(Clone, PartialEq, Eq)]
pub struct CloudCliEntry {
    pub profile_name: String,
    pub key_id: String,
    pub key: String,
    pub token: String,
}

impl CloudCliEntry {
    pub fn new(creds: &CloudCredentials, account: &Account, explicit_override: &str) -> Self {
        Self {
            profile_name: resolve_profile_name(account, explicit_override),
            key_id: creds.access_key_id.clone(),
            key: creds.secret_access_key.clone(),
            token: creds.session_token.clone(),
        }
    }
}

impl fmt::Debug for CloudCliEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudCliEntry")
            .field("profile_name", &self.profile_name)
            .field("key_id", &REDACTED)
            .field("key", &REDACTED)
            .field("token", &REDACTED)
            .finish()
    }
}
