use crate::credentials::Account;

/// Picks the credentials-file profile for `account`.
///
/// A non-empty `explicit_override` wins, then the account alias, then the
/// account name.
pub fn resolve_profile_name(account: &Account, explicit_override: &str) -> String {
    if !explicit_override.is_empty() {
        return explicit_override.to_string();
    }

    if !account.alias.is_empty() {
        return account.alias.clone();
    }

    account.name.clone()
}
