use std::io::{self, Write};

use crate::domain::{
    CommitOutcome, DirectoryStatus, RelocationOutcome, ReorganizeEvent, WriteStatus,
};

/// Write the human-readable line(s) for one event.
pub(super) fn write_event<W: Write>(
    out: &mut W,
    event: ReorganizeEvent<'_>,
    quiet: bool,
) -> io::Result<()> {
    match event {
        ReorganizeEvent::Directory(dir) => match dir.status {
            DirectoryStatus::Created => writeln!(out, "📁 Created {}/", dir.path),
            DirectoryStatus::Existing => writeln!(out, "📁 {}/ already exists", dir.path),
        },
        ReorganizeEvent::Relocation(RelocationOutcome::Moved { source, destination, tracked }) => {
            if *tracked {
                writeln!(out, "✅ Moved {} → {}", source, destination)
            } else {
                writeln!(out, "✅ Moved {} → {} (was untracked)", source, destination)
            }
        }
        ReorganizeEvent::Relocation(RelocationOutcome::Skipped { source }) => {
            writeln!(out, "ℹ️  Skipped {} (not found)", source)
        }
        ReorganizeEvent::Template(template) => match template.status {
            WriteStatus::Created => writeln!(out, "📝 Created {}", template.path),
            WriteStatus::Unchanged => writeln!(out, "📝 Rewrote {} (unchanged)", template.path),
            WriteStatus::Overwritten => {
                writeln!(out, "⚠️  Overwrote {} (local edits replaced)", template.path)
            }
        },
        ReorganizeEvent::Guidance(lines) => {
            if quiet || lines.is_empty() {
                return Ok(());
            }
            writeln!(out, "\n💡 Next steps:")?;
            for line in lines {
                writeln!(out, "   - {}", line)?;
            }
            writeln!(out)
        }
        ReorganizeEvent::Commit(CommitOutcome::Committed { sha, changes }) => {
            let short = sha.get(..7).unwrap_or(sha);
            writeln!(out, "✅ Committed {} ({} changed paths)", short, changes)
        }
        ReorganizeEvent::Commit(CommitOutcome::NothingToCommit) => {
            writeln!(out, "ℹ️  Nothing to commit; repository is already reorganized")
        }
    }
}
