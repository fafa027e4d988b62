use crate::domain::{AppError, RelocationOutcome, RelocationRule, ReorganizeEvent};
use crate::ports::{Git, RepositoryFilesystem};

/// Apply every relocation rule whose source is present at the root.
///
/// Absent sources are skipped. An occupied target aborts the run, the same
/// way `git mv` refuses to overwrite.
pub(super) fn execute<F, G, O>(
    filesystem: &F,
    git: &G,
    rules: &[RelocationRule],
    observer: &mut O,
) -> Result<Vec<RelocationOutcome>, AppError>
where
    F: RepositoryFilesystem,
    G: Git,
    O: FnMut(ReorganizeEvent<'_>) -> Result<(), AppError>,
{
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let outcome = relocate(filesystem, git, rule)?;
        observer(ReorganizeEvent::Relocation(&outcome))?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn relocate<F, G>(
    filesystem: &F,
    git: &G,
    rule: &RelocationRule,
) -> Result<RelocationOutcome, AppError>
where
    F: RepositoryFilesystem,
    G: Git,
{
    let source = &rule.source;
    if !filesystem.exists(source) {
        return Ok(RelocationOutcome::Skipped { source: source.clone() });
    }
    if !filesystem.is_file(source) {
        return Err(AppError::InvalidSource { path: source.to_string() });
    }

    let destination = rule.target()?;
    if filesystem.exists(&destination) {
        return Err(AppError::RelocationConflict {
            path: source.to_string(),
            destination: destination.to_string(),
        });
    }

    let tracked = git.is_tracked(source)?;
    git.move_path(source, &destination)?;
    Ok(RelocationOutcome::Moved { source: source.clone(), destination, tracked })
}
