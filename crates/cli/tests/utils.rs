#![allow(dead_code)]

use starbase_sandbox::{Sandbox, assert_cmd};
use std::time::Duration;

pub fn create_empty_sysnap_sandbox() -> Sandbox {
    starbase_sandbox::create_empty_sandbox()
}

pub fn create_sysnap_command(sandbox: &Sandbox) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sysnap").unwrap();
    cmd.current_dir(sandbox.path());
    cmd.timeout(Duration::from_secs(60));
    cmd.env("NO_COLOR", "1");
    cmd.env("SYSNAP_TEST", "true");
    cmd.env_remove("SYSNAP_LOG");
    cmd.env_remove("SYSNAP_TRUNCATE");
    cmd
}

pub fn get_stdout(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}
