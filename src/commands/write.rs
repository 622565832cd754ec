use serde::Serialize;

use crate::cli::WriteArgs;
use crate::context::AppContext;
use crate::credentials::CloudCliEntry;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct WriteResult {
    profile: String,
    path: String,
    created: bool,
}

pub fn run(ctx: &AppContext, args: WriteArgs) -> AppResult<()> {
    let result = write_profile(ctx, &args)?;
    let verb = if result.created { "created" } else { "updated" };
    let text = format!("{}: {verb} in {}", result.profile, result.path);
    ctx.output.emit(&text, &result)
}

fn write_profile(ctx: &AppContext, args: &WriteArgs) -> AppResult<WriteResult> {
    let account = args.account.account();
    let entry = CloudCliEntry::new(&args.credentials(), &account, &args.account.profile);

    let created = ctx.credentials.write_entry(&entry)?;
    tracing::info!(
        profile = %entry.profile_name,
        account_id = %account.id,
        "credentials written"
    );

    Ok(WriteResult {
        profile: entry.profile_name,
        path: ctx.credentials.path().display().to_string(),
        created,
    })
}
