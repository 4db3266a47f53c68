//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a kvenv command pointed at this test's vault.
    ///
    /// Returns a Command configured with:
    /// - AZURE_KEYVAULT_URL set to the file-backed vault
    /// - Current directory set to the test directory
    /// - Colors and inherited kvenv settings removed
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("AZURE_KEYVAULT_URL", self.vault_url());
        cmd
    }

    /// Create a kvenv command with no vault configured at all.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("kvenv").expect("failed to find kvenv binary");
        cmd.env_remove("AZURE_KEYVAULT_URL");
        cmd.env_remove("DISABLE_SSL_VERIFY");
        cmd.env_remove("KVENV_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `kvenv` with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run kvenv")
    }

    /// Shortcut for `kvenv test`.
    pub fn test_connection(&self) -> Output {
        self.run(&["test"])
    }

    /// Shortcut for `kvenv list`.
    pub fn list(&self) -> Output {
        self.run(&["list"])
    }

    /// Shortcut for `kvenv get`.
    pub fn get(&self, name: &str) -> Output {
        self.run(&["get", name])
    }

    /// Shortcut for `kvenv get-multiple`.
    pub fn get_multiple(&self, names: &[&str]) -> Output {
        let mut args = vec!["get-multiple"];
        args.extend_from_slice(names);
        self.run(&args)
    }

    /// Shortcut for `kvenv set`.
    pub fn set(&self, name: &str, value: &str) -> Output {
        self.run(&["set", name, value])
    }

    /// Shortcut for `kvenv get-prefix`.
    pub fn get_prefix(&self, prefix: &str) -> Output {
        self.run(&["get-prefix", prefix])
    }

    /// Shortcut for `kvenv get-prefix-save`.
    pub fn get_prefix_save(&self, prefix: &str) -> Output {
        self.run(&["get-prefix-save", prefix])
    }
}
