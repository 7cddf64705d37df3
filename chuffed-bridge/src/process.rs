use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;

use log::debug;

/// What a finished solver process left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: i32,
    /// Everything the process wrote to stdout and stderr, interleaved as it was written.
    pub output: Vec<u8>,
}

/// Runs `executable` with `argument` as its only argument and waits for it to finish.
///
/// Both output streams of the child are connected to the write end of a single pipe, so the
/// captured output is the merged stream. No shell is involved: the argument reaches the child as
/// one element of its argument vector, whatever characters it contains.
pub fn run_merged(executable: &OsStr, argument: &Path) -> std::io::Result<ProcessOutput> {
    let (mut reader, writer) = std::io::pipe()?;

    let mut child = {
        let mut command = Command::new(executable);
        let _ = command
            .arg(argument)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        // The command owns our copies of the write end; they have to be closed before reading,
        // otherwise the reader never sees end-of-file.
        command.spawn()?
    };

    let mut output = Vec::new();
    let read = reader.read_to_end(&mut output);
    let status = child.wait()?;
    let _ = read?;

    let exit_code = normalise_exit_status(status);
    debug!(
        "{} exited with code {exit_code} after writing {} bytes",
        executable.to_string_lossy(),
        output.len()
    );

    Ok(ProcessOutput { exit_code, output })
}

/// The exit code of a process. On Unix this is the low 8 bits of the termination status; a
/// process killed by a signal reports `128 + signal`, as a shell would.
pub fn normalise_exit_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    fn sh(script: &str) -> ProcessOutput {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("script.sh");
        std::fs::write(&path, script).unwrap();

        run_merged(OsStr::new("sh"), &path).unwrap()
    }

    #[test]
    fn exit_codes_are_normalised() {
        assert_eq!(normalise_exit_status(ExitStatus::from_raw(0)), 0);
        assert_eq!(normalise_exit_status(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(normalise_exit_status(ExitStatus::from_raw(9)), 137);
    }

    #[test]
    fn stdout_and_stderr_are_merged() {
        let result = sh("echo first\necho second >&2\necho third\nexit 4\n");

        assert_eq!(result.exit_code, 4);
        assert_eq!(result.output, b"first\nsecond\nthird\n");
    }

    #[test]
    fn argument_with_whitespace_is_passed_intact() {
        let directory = tempfile::tempdir().unwrap();
        let nested = directory.path().join("with some spaces");
        std::fs::create_dir(&nested).unwrap();
        let path = nested.join("script.sh");
        std::fs::write(&path, "echo ran\n").unwrap();

        let result = run_merged(OsStr::new("sh"), &path).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, b"ran\n");
    }

    #[test]
    fn missing_executable_fails_to_spawn() {
        let error = run_merged(
            OsStr::new("chuffed-bridge-no-such-executable"),
            Path::new("input.fzn"),
        )
        .unwrap_err();

        assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
    }
}
