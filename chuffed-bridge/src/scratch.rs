use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::Builder;
use tempfile::TempPath;

use crate::error::BridgeError;
use crate::error::BridgeResult;
use crate::options::BridgeOptions;

/// A file holding the payload of a single out-of-process invocation.
///
/// The name is generated and the file created in one atomic step, so concurrent invocations
/// never share a path. The file is removed when the value is dropped, which covers every early
/// return; [`ScratchFile::remove`] does the same but reports the outcome.
#[derive(Debug)]
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    pub fn create(options: &BridgeOptions) -> BridgeResult<ScratchFile> {
        let mut builder = Builder::new();
        let _ = builder
            .prefix(&options.scratch_prefix)
            .suffix(&options.scratch_suffix);

        let file = match options.scratch_directory.as_ref() {
            Some(directory) => builder.tempfile_in(directory),
            None => builder.tempfile(),
        }
        .map_err(BridgeError::CreateScratchFile)?;

        // Only the name is kept; the payload is written through a fresh handle.
        let path = file.into_temp_path();
        debug!("created scratch file {}", path.display());

        Ok(ScratchFile { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `bytes` verbatim, replacing any previous content, and closes the file.
    pub fn write_payload(&self, bytes: &[u8]) -> BridgeResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(BridgeError::OpenScratchFile)?;

        file.write_all(bytes)
            .and_then(|_| file.flush())
            .and_then(|_| file.sync_all())
            .map_err(BridgeError::WriteScratchFile)
    }

    pub fn remove(self) -> std::io::Result<()> {
        self.path.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_in(directory: &Path) -> BridgeOptions {
        BridgeOptions {
            scratch_directory: Some(directory.to_path_buf()),
            ..Default::default()
        }
    }

    fn entries(directory: &Path) -> usize {
        std::fs::read_dir(directory).unwrap().count()
    }

    #[test]
    fn name_has_prefix_and_suffix() {
        let directory = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create(&options_in(directory.path())).unwrap();

        let name = scratch.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("chuffed_"), "{name}");
        assert!(name.ends_with(".fzn"), "{name}");
        assert!(name.len() > "chuffed_.fzn".len(), "{name}");
        assert_eq!(scratch.path().parent(), Some(directory.path()));
        assert!(scratch.path().is_file());
    }

    #[test]
    fn payload_is_stored_verbatim() {
        let directory = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create(&options_in(directory.path())).unwrap();

        let payload = b"var 1..3: x;\r\nconstraint x = 2;\nsolve satisfy;\x00\xff".to_vec();
        scratch.write_payload(&payload).unwrap();

        assert_eq!(std::fs::read(scratch.path()).unwrap(), payload);
    }

    #[test]
    fn writing_replaces_previous_content() {
        let directory = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create(&options_in(directory.path())).unwrap();

        scratch.write_payload(b"a much longer first payload").unwrap();
        scratch.write_payload(b"short").unwrap();

        assert_eq!(std::fs::read(scratch.path()).unwrap(), b"short");
    }

    #[test]
    fn file_is_deleted_on_drop() {
        let directory = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create(&options_in(directory.path())).unwrap();
        let path = scratch.path().to_path_buf();

        drop(scratch);

        assert!(!path.exists());
        assert_eq!(entries(directory.path()), 0);
    }

    #[test]
    fn file_is_deleted_on_remove() {
        let directory = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create(&options_in(directory.path())).unwrap();
        let path = scratch.path().to_path_buf();

        scratch.remove().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn concurrent_scratch_files_are_distinct() {
        let directory = tempfile::tempdir().unwrap();
        let options = options_in(directory.path());

        let paths = std::thread::scope(|scope| {
            let handles = (0..8)
                .map(|_| scope.spawn(|| ScratchFile::create(&options).unwrap()))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        });

        let mut names = paths
            .iter()
            .map(|scratch| scratch.path().to_path_buf())
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn vanished_file_is_an_open_error() {
        let directory = tempfile::tempdir().unwrap();
        let scratch = ScratchFile::create(&options_in(directory.path())).unwrap();
        std::fs::remove_file(scratch.path()).unwrap();

        let error = scratch.write_payload(b"solve satisfy;\n").unwrap_err();

        assert_eq!(error.reason(), "failed_to_open_temp_file");
        drop(scratch);
        assert_eq!(entries(directory.path()), 0);
    }

    #[test]
    fn missing_directory_is_a_creation_error() {
        let directory = tempfile::tempdir().unwrap();
        let options = options_in(&directory.path().join("does-not-exist"));

        let error = ScratchFile::create(&options).unwrap_err();

        assert_eq!(error.reason(), "failed_to_create_temp_file");
    }
}
