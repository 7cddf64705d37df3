use std::ffi::OsString;
use std::path::PathBuf;

/// The name of the solver executable, looked up on `PATH`.
pub const DEFAULT_EXECUTABLE: &str = "chuffed";
pub const DEFAULT_SCRATCH_PREFIX: &str = "chuffed_";
pub const DEFAULT_SCRATCH_SUFFIX: &str = ".fzn";

/// Options for the [`OutOfProcessBridge`](crate::OutOfProcessBridge).
///
/// The host entry points always use the default; the fields exist so an embedder (or a test) can
/// point the bridge at a different executable or scratch directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeOptions {
    /// The solver executable. A bare name is resolved through the executable search path.
    pub executable: OsString,
    /// Where scratch files are created; `None` means the platform's temporary directory.
    pub scratch_directory: Option<PathBuf>,
    pub scratch_prefix: String,
    pub scratch_suffix: String,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        BridgeOptions {
            executable: OsString::from(DEFAULT_EXECUTABLE),
            scratch_directory: None,
            scratch_prefix: DEFAULT_SCRATCH_PREFIX.to_owned(),
            scratch_suffix: DEFAULT_SCRATCH_SUFFIX.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_chuffed_on_path() {
        let options = BridgeOptions::default();

        assert_eq!(options.executable, OsString::from("chuffed"));
        assert_eq!(options.scratch_directory, None);
        assert_eq!(options.scratch_prefix, "chuffed_");
        assert_eq!(options.scratch_suffix, ".fzn");
    }
}
