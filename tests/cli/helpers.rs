use std::net::TcpStream;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(15);

/// A `tubeboost serve` process without an API key, killed on drop.
pub struct TestServer {
    pub url: String,
    child: Child,
}

impl TestServer {
    pub fn start() -> Self {
        let port = portpicker::pick_unused_port().expect("no free port");
        let address = format!("127.0.0.1:{port}");

        let child = Command::new(env!("CARGO_BIN_EXE_tubeboost"))
            .arg("serve")
            .env("TUBEBOOST_BIND_ADDRESS", &address)
            .env_remove("OPENAI_API_KEY")
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to start tubeboost serve");

        let deadline = Instant::now() + STARTUP_TIMEOUT;
        while TcpStream::connect(&address).is_err() {
            assert!(Instant::now() < deadline, "server did not start on {address}");
            thread::sleep(Duration::from_millis(50));
        }

        Self {
            url: format!("http://{address}"),
            child,
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        run_tubeboost(args, &[("TUBEBOOST_URL", &self.url)])
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn run_tubeboost(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tubeboost"));
    command.args(args).env("RUST_LOG", "warn");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("failed to run tubeboost")
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|_| panic!("Should output valid JSON, got: {stdout}"))
}
