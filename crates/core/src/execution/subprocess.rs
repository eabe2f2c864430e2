//! Merged-output subprocess plumbing.
//!
//! stdout and stderr are both attached to the write end of a single OS pipe,
//! so the bytes arrive in exactly the order the process wrote them.

use std::io::{self, PipeReader, Read};
use std::process::Stdio;

use tokio::process::{Child, Command};

use super::record::ExecutionError;

/// Spawn `cmd` with stdin closed and stdout/stderr sharing one pipe.
///
/// Returns the child and the read end of the merged stream.
pub fn spawn_merged(mut cmd: Command) -> Result<(Child, PipeReader), ExecutionError> {
    let (reader, writer) = io::pipe().map_err(ExecutionError::Spawn)?;
    let stderr_writer = writer.try_clone().map_err(ExecutionError::Spawn)?;

    // `kill_on_drop(true)` ensures the child does not outlive a dropped run.
    cmd.stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr_writer)
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(ExecutionError::Spawn)?;

    // The command still holds the parent's copies of the write end. They must
    // be closed or the reader never sees EOF.
    drop(cmd);

    Ok((child, reader))
}

/// Read `reader` to EOF and split it into lines, terminating every line with `\n`.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. Invalid UTF-8 is replaced
/// lossily. Blocking; run it on the blocking pool.
pub fn collect_lines<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut output = String::with_capacity(bytes.len() + 1);
    let mut rest = bytes.as_slice();

    while !rest.is_empty() {
        let end = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        output.push_str(&String::from_utf8_lossy(&rest[..end]));
        output.push('\n');

        let terminator = match &rest[end..] {
            [b'\r', b'\n', ..] => 2,
            [_, ..] => 1,
            [] => 0,
        };
        rest = &rest[end + terminator..];
    }

    Ok(output)
}
