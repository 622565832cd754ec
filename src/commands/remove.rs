use serde::Serialize;

use crate::cli::RemoveArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct RemoveResult {
    profile: String,
    path: String,
}

pub fn run(ctx: &AppContext, args: RemoveArgs) -> AppResult<()> {
    let mut document = ctx.credentials.load()?;
    if !document.remove_profile(&args.profile) {
        return Err(AppError::InvalidInput(format!(
            "profile `{}` not found in {}",
            args.profile,
            ctx.credentials.path().display()
        )));
    }

    ctx.credentials.save(&document)?;
    tracing::info!(profile = %args.profile, "profile removed");

    let result = RemoveResult {
        profile: args.profile,
        path: ctx.credentials.path().display().to_string(),
    };
    let text = format!("{}: removed from {}", result.profile, result.path);
    ctx.output.emit(&text, &result)
}
