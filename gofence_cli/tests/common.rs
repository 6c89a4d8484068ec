use assert_cmd::Command;

pub fn gofence_cmd() -> Command {
	let mut cmd = Command::cargo_bin("gofence").expect("gofence binary should be built");
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}
