mod comments;
pub mod document;
pub mod model;
pub mod store;

pub use document::{CredentialDocument, CredentialSection};
pub use model::{Account, CloudCliEntry, CloudCredentials};
pub use store::CredentialsFile;

use crate::error::AppResult;

pub fn save_credential_entry(
    document: &mut CredentialDocument,
    entry: &CloudCliEntry,
) -> AppResult<()> {
    document.save_entry(entry)
}
