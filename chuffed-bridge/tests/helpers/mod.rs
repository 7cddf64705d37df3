//! Fake solver executables for exercising the out-of-process bridge.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;

use chuffed_bridge::BridgeOptions;
use chuffed_bridge::OutOfProcessBridge;
use tempfile::TempDir;

/// A shell script standing in for `chuffed`, together with a private scratch directory whose
/// name contains whitespace.
#[derive(Debug)]
pub(crate) struct FakeSolver {
    directory: TempDir,
    pub(crate) executable: PathBuf,
    pub(crate) scratch_directory: PathBuf,
}

impl FakeSolver {
    pub(crate) fn new(script: &str) -> FakeSolver {
        let directory = tempfile::tempdir().expect("Failed to create test directory.");

        let executable = directory.path().join("chuffed");
        std::fs::write(&executable, format!("#!/bin/sh\n{script}"))
            .expect("Failed to write fake solver.");
        std::fs::set_permissions(&executable, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake solver executable.");

        let scratch_directory = directory.path().join("scratch dir");
        std::fs::create_dir(&scratch_directory).expect("Failed to create scratch directory.");

        FakeSolver {
            directory,
            executable,
            scratch_directory,
        }
    }

    pub(crate) fn bridge(&self) -> OutOfProcessBridge {
        OutOfProcessBridge::new(BridgeOptions {
            executable: self.executable.clone().into_os_string(),
            scratch_directory: Some(self.scratch_directory.clone()),
            ..Default::default()
        })
    }

    pub(crate) fn scratch_entries(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.scratch_directory)
            .expect("Failed to read scratch directory.")
            .map(|entry| entry.expect("Failed to read directory entry.").path())
            .collect()
    }

    pub(crate) fn root(&self) -> &Path {
        self.directory.path()
    }
}

/// Imitates `chuffed` for the handful of models used in the tests.
pub(crate) const CHUFFED_LIKE: &str = r#"
if [ ! -s "$1" ]; then
    echo "$1:1.1: syntax error, unexpected end of file" >&2
    exit 1
fi
if grep -q "not a valid" "$1"; then
    echo "$1:1.1-3: syntax error, unexpected identifier" >&2
    exit 1
fi
if grep -q "x = 5" "$1"; then
    echo "=====UNSATISFIABLE====="
    exit 1
fi
echo "x = 2;"
echo "----------"
echo "=========="
"#;

/// Prints the payload back.
pub(crate) const ECHO_PAYLOAD: &str = "cat \"$1\"\n";

/// Prints the number of arguments followed by each argument on its own line.
pub(crate) const ECHO_ARGUMENTS: &str = "echo \"$#\"\nfor argument in \"$@\"; do echo \"$argument\"; done\n";
