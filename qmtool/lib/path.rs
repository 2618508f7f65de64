//! `qmtool::path` is a module containing path utilities for the qmtool project.

use typed_path::Utf8UnixPathBuf;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Derives the per-process scratch directory from a base temporary directory.
///
/// The process id is joined onto `base` as a single path component, so a trailing
/// separator on `base` does not produce a doubled `/`.
///
/// ## Examples
///
/// ```
/// use qmtool::path::scratch_dir_for;
///
/// assert_eq!(scratch_dir_for("/tmp", 4242), "/tmp/4242");
/// assert_eq!(scratch_dir_for("/scratch/user/", 17), "/scratch/user/17");
/// ```
pub fn scratch_dir_for(base: &str, pid: u32) -> String {
    Utf8UnixPathBuf::from(base)
        .join(pid.to_string())
        .into_string()
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
