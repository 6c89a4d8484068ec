mod common;

use gofence_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use similar_asserts::assert_eq;

const RENDERED: &str = "para\n\n    code1\n    code2\n\npara2\n";
const FENCED: &str = "para\n\n```go\ncode1\ncode2\n```\n\npara2\n";

#[test]
fn rewrites_input_file_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("README.raw.md");
	std::fs::write(&input, RENDERED)?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg(&input)
		.assert()
		.success()
		.stdout(FENCED);

	Ok(())
}

#[test]
fn rewrites_stdin() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("-")
		.write_stdin("intro\n    x := 1\n\n")
		.assert()
		.success()
		.stdout("intro\n```go\nx := 1\n```\n");

	Ok(())
}

#[test]
fn writes_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("README.raw.md");
	let output = tmp.path().join("README.md");
	std::fs::write(&input, RENDERED)?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(&output)
		.assert()
		.success()
		.stdout("")
		.stderr(predicates::str::contains("1 fenced code block(s)"));

	assert_eq!(std::fs::read_to_string(&output)?, FENCED);

	Ok(())
}

#[test]
fn language_flag_overrides_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("gofence.toml"),
		"[fence]\nlanguage = \"golang\"\n",
	)?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("-")
		.arg("--language")
		.arg("go")
		.write_stdin("    a\n")
		.assert()
		.success()
		.stdout("```go\na\n```\n");

	Ok(())
}

#[test]
fn fence_config_is_applied() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("gofence.toml"),
		"[fence]\nlanguage = \"golang\"\nindent = \"\\t\"\n",
	)?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("-")
		.write_stdin("\ta\n    b\n")
		.assert()
		.success()
		.stdout("```golang\na\n```\n\n    b\n");

	Ok(())
}

#[test]
fn missing_input_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg(tmp.path().join("missing.md"))
		.assert()
		.failure()
		.code(1)
		.stdout("")
		.stderr(predicates::str::contains("failed to open input"));

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("gofence.toml"), "[fence]\nindent = \"\"\n")?;

	common::gofence_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--input")
		.arg("-")
		.write_stdin("text\n")
		.assert()
		.failure()
		.stderr(
			predicates::str::contains("indent must not be empty")
				.and(predicates::str::contains("gofence::invalid_indent")),
		);

	Ok(())
}

#[test]
fn input_conflicts_with_template() {
	common::gofence_cmd()
		.arg("README.md.tmpl")
		.arg("--input")
		.arg("-")
		.assert()
		.failure()
		.stderr(predicates::str::contains("cannot be used with"));
}
