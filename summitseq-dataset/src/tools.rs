use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::errors::{DatasetError, Result};

///
/// Run an external tool to completion and return its output.
///
/// A tool that cannot be started, or that exits with a non-zero status, is a
/// [`DatasetError::CollaboratorFailure`] carrying stderr (or stdout, or the
/// exit status when both are empty).
pub fn run_tool<I, S>(program: &Path, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    debug!("Running {:?}", command);

    let output = command.output().map_err(|e| {
        DatasetError::CollaboratorFailure(format!(
            "could not execute '{}': {}",
            program.display(),
            e
        ))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let detail = if !stderr.is_empty() {
            stderr
        } else if !stdout.is_empty() {
            stdout
        } else {
            format!("exit status {}", output.status)
        };
        return Err(DatasetError::CollaboratorFailure(format!(
            "'{}' failed: {}",
            program.display(),
            detail
        )));
    }

    Ok(output)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_missing_program() {
        let err = run_tool(Path::new("/nonexistent/summitseq-tool"), ["--version"]).unwrap_err();
        assert!(matches!(err, DatasetError::CollaboratorFailure(_)));
        assert!(err.to_string().contains("could not execute"));
    }

    #[rstest]
    fn test_failing_program_reports_stderr() {
        let err = run_tool(Path::new("sh"), ["-c", "echo boom >&2; exit 3"]).unwrap_err();
        match err {
            DatasetError::CollaboratorFailure(msg) => assert!(msg.contains("boom"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[rstest]
    fn test_successful_program() {
        let output = run_tool(Path::new("sh"), ["-c", "printf ok"]).unwrap();
        assert_eq!(output.stdout, b"ok");
    }
}
