use std::fs;

use camino::Utf8PathBuf;
use tempfile::TempDir;
use tofu_apply::ApplyInputs;
use tofu_apply::command::CommandAssembler;
use tofu_apply::diagnostics::RecordingDiagnostics;

/// Builds an input record from `(name, value)` pairs using the kebab-case input names.
#[allow(dead_code)]
pub fn inputs(pairs: &[(&str, &str)]) -> ApplyInputs {
    ApplyInputs::from_pairs(pairs.iter().copied())
}

/// Builds the command for `pairs`, panicking if any warning was reported.
#[allow(dead_code)]
pub fn build_quiet(pairs: &[(&str, &str)]) -> String {
    let diagnostics = RecordingDiagnostics::new();
    let command = CommandAssembler::new(&diagnostics).build(&inputs(pairs));
    assert!(
        diagnostics.is_empty(),
        "unexpected warnings: {:?}",
        diagnostics.messages()
    );
    command
}

/// Writes `content` to `inputs.yml` inside a fresh temporary directory.
///
/// The directory is returned so it outlives the test body.
#[allow(dead_code)]
pub fn write_inputs_file(content: &str) -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("inputs.yml"))
        .expect("temp dir path should be UTF-8");
    fs::write(&path, content).expect("failed to write inputs file");
    (dir, path)
}
