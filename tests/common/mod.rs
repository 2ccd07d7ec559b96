use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Runs the binary from an empty directory with a scrubbed environment so a
/// developer's `.env` or shell variables cannot leak into assertions.
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self { tmp: TempDir::new().expect("create temp dir") }
    }

    pub fn path(&self) -> &std::path::Path {
        self.tmp.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("humanize");
        cmd.current_dir(self.tmp.path())
            .env_remove("GROQ_API_KEY")
            .env_remove("GROQ_BASE_URL")
            .env_remove("HUMANIZER_MODEL")
            .env_remove("HUMANIZER_TEMPERATURE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command wired to a mock completions server.
    pub fn cmd_against(&self, server_url: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GROQ_API_KEY", "gsk_test").env("GROQ_BASE_URL", server_url);
        cmd
    }

    pub fn run_json(&self, server_url: &str, args: &[&str]) -> Value {
        let out = self
            .cmd_against(server_url)
            .args(args)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}
