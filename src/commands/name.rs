use serde::Serialize;

use crate::cli::AccountArgs;
use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ProfileNameView {
    account_id: String,
    profile: String,
}

pub fn run(ctx: &AppContext, args: AccountArgs) -> AppResult<()> {
    let account = args.account();
    let profile = config::resolve_profile_name(&account, &args.profile);

    let view = ProfileNameView {
        account_id: account.id,
        profile,
    };
    ctx.output.emit(&view.profile, &view)
}
