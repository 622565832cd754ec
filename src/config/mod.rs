pub mod paths;
pub mod profile;

pub use paths::{CREDENTIALS_FILE_ENV, credentials_file};
pub use profile::resolve_profile_name;
