use keynote_core::enums::{WishlistPriority, WishlistStatus};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct EditResponse<'a, T: Serialize> {
    id: &'a str,
    #[serde(flatten)]
    change: T,
}

#[derive(Serialize)]
struct StatusChange {
    status: WishlistStatus,
}

#[derive(Serialize)]
struct PriorityChange {
    priority: WishlistPriority,
}

#[derive(Serialize)]
struct NotesChange {
    notes: Option<String>,
}

#[derive(Serialize)]
struct Removed {
    removed: bool,
}

fn not_changed(id: &str) -> anyhow::Error {
    anyhow::anyhow!("could not update wishlist entry '{id}': it may not exist, or the database failed")
}

/// Any status may follow any other.
pub async fn status(id: &str, raw: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<WishlistStatus>(raw, "status")?;
    if !ctx.gateway().set_status(id, status).await {
        return Err(not_changed(id));
    }
    output(&EditResponse { id, change: StatusChange { status } }, flags.format)
}

pub async fn priority(
    id: &str,
    raw: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let priority = parse_enum::<WishlistPriority>(raw, "priority")?;
    if !ctx.gateway().set_priority(id, priority).await {
        return Err(not_changed(id));
    }
    output(&EditResponse { id, change: PriorityChange { priority } }, flags.format)
}

pub async fn notes(
    id: &str,
    notes: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let notes = notes.filter(|text| !text.trim().is_empty());
    if !ctx.gateway().set_notes(id, notes.clone()).await {
        return Err(not_changed(id));
    }
    output(&EditResponse { id, change: NotesChange { notes } }, flags.format)
}

pub async fn remove(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("remove wishlist entry '{id}'? re-run with --yes to confirm");
    }
    if !ctx.gateway().remove(id).await {
        return Err(not_changed(id));
    }
    output(&EditResponse { id, change: Removed { removed: true } }, flags.format)
}
