use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        credentials_file,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(credentials_file, json)?;

    match command {
        Command::Name(args) => commands::name::run(&ctx, args),
        Command::Write(args) => commands::write::run(&ctx, args),
        Command::List => commands::list::run(&ctx),
        Command::Remove(args) => commands::remove::run(&ctx, args),
    }
}
