use crate::domain::{AppError, ReorganizeEvent, TemplateDocument, WriteStatus, WrittenTemplate};
use crate::ports::RepositoryFilesystem;

/// Write every template, replacing whatever is at its path.
pub(super) fn execute<F, O>(
    filesystem: &F,
    templates: &[TemplateDocument],
    observer: &mut O,
) -> Result<Vec<WrittenTemplate>, AppError>
where
    F: RepositoryFilesystem,
    O: FnMut(ReorganizeEvent<'_>) -> Result<(), AppError>,
{
    let mut written = Vec::with_capacity(templates.len());

    for template in templates {
        let status = match filesystem.read_bytes(&template.path)? {
            None => WriteStatus::Created,
            Some(existing) if existing == template.content.as_bytes() => WriteStatus::Unchanged,
            Some(_) => WriteStatus::Overwritten,
        };
        filesystem.write_file(&template.path, &template.content)?;

        let entry = WrittenTemplate { path: template.path.clone(), status };
        observer(ReorganizeEvent::Template(&entry))?;
        written.push(entry);
    }

    Ok(written)
}
