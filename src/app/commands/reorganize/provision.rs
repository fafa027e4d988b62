use crate::domain::{
    AppError, DestinationDirectory, DirectoryStatus, ProvisionedDirectory, ReorganizeEvent,
};
use crate::ports::RepositoryFilesystem;

/// Create every destination directory that is not already present.
pub(super) fn execute<F, O>(
    filesystem: &F,
    directories: &[DestinationDirectory],
    observer: &mut O,
) -> Result<Vec<ProvisionedDirectory>, AppError>
where
    F: RepositoryFilesystem,
    O: FnMut(ReorganizeEvent<'_>) -> Result<(), AppError>,
{
    let mut provisioned = Vec::with_capacity(directories.len());

    for dir in directories {
        let created = filesystem.create_dir_all(dir.path())?;
        let status = if created { DirectoryStatus::Created } else { DirectoryStatus::Existing };
        let entry = ProvisionedDirectory { path: dir.path().clone(), status };
        observer(ReorganizeEvent::Directory(&entry))?;
        provisioned.push(entry);
    }

    Ok(provisioned)
}
