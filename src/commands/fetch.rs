use crate::core::{archive, drive::DriveClient, target::FetchTarget};
use crate::error::Result;
use crate::utils::fs;

/// Ensure the extracted dataset exists under the destination directory,
/// downloading and unpacking the remote archive only if it does not.
///
/// The five steps run strictly in sequence with no retry and no rollback;
/// any failure is terminal for the invocation. A leftover archive from an
/// interrupted run does not block a rerun, since only the extracted
/// directory is checked here.
pub fn ensure_materialized(target: &FetchTarget) -> Result<()> {
    let extracted_dir = target.extracted_dir();
    if extracted_dir.is_dir() {
        println!("{} already exists", extracted_dir.display());
        return Ok(());
    }

    println!("Connecting ...");
    let client = DriveClient::new()?;
    client.fetch_to_file(&target.remote_resource_id, &target.archive_path())?;

    materialize_archive(target)
}

/// Extraction, relocation and cleanup for an archive already on disk.
pub fn materialize_archive(target: &FetchTarget) -> Result<()> {
    let archive_path = target.archive_path();

    println!("Extracting ...");
    archive::extract_tar_gz(&archive_path, &target.staging_dir())?;

    println!("Moving the files and cleaning up ...");
    // The archive is trusted to unpack to exactly the expected folder name;
    // if it does not, the move fails rather than guessing.
    fs::move_dir(&target.staged_dir(), &target.extracted_dir())?;
    fs::remove_file_best_effort(&archive_path);

    println!("Done.");
    Ok(())
}
