//! The reorganize command.
//!
//! Runs the layout against a repository in a fixed order: provision
//! directories, relocate sources, generate templates, show guidance, commit.
//! Each step is handed to the observer as soon as it completes. The first
//! failing step aborts the run; completed steps are not rolled back.

mod commit;
mod generate;
mod provision;
mod relocate;

use crate::app::AppContext;
use crate::domain::{AppError, Layout, ReorganizeEvent, ReorganizeReport};
use crate::ports::{Git, RepositoryFilesystem};

/// Execute the reorganize command.
pub fn execute<F, G, O>(
    ctx: &AppContext<F, G>,
    layout: &Layout,
    mut observer: O,
) -> Result<ReorganizeReport, AppError>
where
    F: RepositoryFilesystem,
    G: Git,
    O: FnMut(ReorganizeEvent<'_>) -> Result<(), AppError>,
{
    let directories = provision::execute(ctx.filesystem(), layout.directories(), &mut observer)?;
    let relocations =
        relocate::execute(ctx.filesystem(), ctx.git(), layout.relocations(), &mut observer)?;
    let templates = generate::execute(ctx.filesystem(), layout.templates(), &mut observer)?;
    observer(ReorganizeEvent::Guidance(layout.guidance()))?;
    let commit = commit::execute(ctx.git(), layout.commit_message(), &mut observer)?;

    Ok(ReorganizeReport {
        root: ctx.filesystem().root().display().to_string(),
        directories,
        relocations,
        templates,
        guidance: layout.guidance().to_vec(),
        commit,
    })
}
