use keynote_db::updates::account::ProfileUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    name: Option<&str>,
    company: Option<&str>,
    title: Option<&str>,
    phone: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_identity()?;
    if name.is_none() && company.is_none() && title.is_none() && phone.is_none() {
        anyhow::bail!("At least one of --name, --company, --title, or --phone must be provided");
    }

    let mut builder = ProfileUpdateBuilder::new();
    if let Some(value) = clearable(name) {
        builder = builder.full_name(value);
    }
    if let Some(value) = clearable(company) {
        builder = builder.company(value);
    }
    if let Some(value) = clearable(title) {
        builder = builder.title(value);
    }
    if let Some(value) = clearable(phone) {
        builder = builder.phone(value);
    }

    let account = ctx.service.update_profile(builder.build()).await?;
    output(&account, flags.format)
}
