use std::process::{Command, Output};

use tempfile::TempDir;

pub mod mock_data;

/// Helper struct to run vialis commands in an isolated temp directory
pub struct VialisTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl VialisTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        VialisTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_vialis").to_string(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute vialis command")
    }

    /// Run with an extra environment variable set on the child process
    pub fn run_with_env(&self, args: &[&str], key: &str, value: &str) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .env(key, value)
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute vialis command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} unexpectedly succeeded\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
