use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::credentials::{Account, CloudCredentials};

#[derive(Debug, Parser)]
#[command(
    name = "awsprofile",
    version,
    about = "Write AWS credential profiles to a shared credentials file"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Credentials file to use (defaults to $AWS_SHARED_CREDENTIALS_FILE or ~/.aws/credentials)"
    )]
    pub credentials_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the profile name an account resolves to
    Name(AccountArgs),
    /// Write session credentials for an account
    Write(WriteArgs),
    /// List profiles in the credentials file
    List,
    /// Remove a profile from the credentials file
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct AccountArgs {
    #[arg(long, help = "Account id")]
    pub account_id: String,
    #[arg(long, help = "Account name")]
    pub account_name: String,
    #[arg(long, default_value = "", help = "Account alias")]
    pub alias: String,
    #[arg(long, default_value = "", help = "Profile name override")]
    pub profile: String,
}

impl AccountArgs {
    pub fn account(&self) -> Account {
        Account::new(&self.account_id, &self.account_name).with_alias(&self.alias)
    }
}

#[derive(Args)]
pub struct WriteArgs {
    #[command(flatten)]
    pub account: AccountArgs,
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true, help = "Access key id")]
    pub access_key_id: String,
    #[arg(
        long,
        env = "AWS_SECRET_ACCESS_KEY",
        hide_env_values = true,
        help = "Secret access key"
    )]
    pub secret_access_key: String,
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true, help = "Session token")]
    pub session_token: String,
}

impl fmt::Debug for WriteArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteArgs")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

impl WriteArgs {
    pub fn credentials(&self) -> CloudCredentials {
        CloudCredentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            &self.session_token,
        )
    }
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(help = "Profile to remove")]
    pub profile: String,
}
