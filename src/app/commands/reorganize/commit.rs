use crate::domain::{AppError, CommitOutcome, ReorganizeEvent};
use crate::ports::Git;

/// Stage the whole tree and commit it, unless nothing differs from HEAD.
pub(super) fn execute<G, O>(
    git: &G,
    message: &str,
    observer: &mut O,
) -> Result<CommitOutcome, AppError>
where
    G: Git,
    O: FnMut(ReorganizeEvent<'_>) -> Result<(), AppError>,
{
    let changes = git.stage_all()?;
    let outcome = if changes == 0 {
        CommitOutcome::NothingToCommit
    } else {
        let sha = git.commit_index(message)?;
        CommitOutcome::Committed { sha, changes }
    };

    observer(ReorganizeEvent::Commit(&outcome))?;
    Ok(outcome)
}
