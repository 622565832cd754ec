use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let profiles = ctx.credentials.load()?.profile_names();
    let text = format_listing(&profiles);
    ctx.output.emit(&text, &profiles)
}

fn format_listing(profiles: &[String]) -> String {
    if profiles.is_empty() {
        return "0 profiles".to_string();
    }

    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| format!("{}. {profile}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_profiles_in_order() {
        let profiles = vec!["default".to_string(), "my-alias".to_string()];
        assert_eq!(format_listing(&profiles), "1. default\n2. my-alias");
    }

    #[test]
    fn reports_empty_listing() {
        assert_eq!(format_listing(&[]), "0 profiles");
    }
}
