use crate::error::BridgeError;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, warn};

/// Placeholder for the argv-style program-name slot the engine's entry
/// point expects. The value itself is immaterial.
pub const ENGINE_ARGV0: &str = "pict";

/// Initial capacity reserved for engine output. The buffer grows past this
/// instead of truncating larger outputs.
pub const OUTPUT_CAPACITY: usize = 8192;

/// The external generation engine: argv in, (status, text) out.
///
/// Status 0 means success and the text is authoritative; any non-zero
/// status is an opaque engine code. Implementations do not interpret it and
/// neither does anything else in this crate.
pub trait Engine {
    fn invoke(&self, argv: &[String]) -> Result<(i32, String), BridgeError>;
}

/// Runs the engine program as a blocking child process, capturing its exit
/// status and stdout.
pub struct CliEngine {
    program: PathBuf,
}

impl CliEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CliEngine {
            program: program.into(),
        }
    }
}

impl Default for CliEngine {
    fn default() -> Self {
        CliEngine::new(ENGINE_ARGV0)
    }
}

impl Engine for CliEngine {
    fn invoke(&self, argv: &[String]) -> Result<(i32, String), BridgeError> {
        // argv[0] is the placeholder slot; the OS supplies the real one
        // when spawning, so only the remainder is forwarded.
        let forwarded = argv.get(1..).unwrap_or(&[]);
        let output = Command::new(&self.program).args(forwarded).output()?;

        // code() is None when the child died to a signal
        let status = output.status.code().unwrap_or(-1);
        let mut text = String::with_capacity(OUTPUT_CAPACITY.max(output.stdout.len()));
        text.push_str(&String::from_utf8_lossy(&output.stdout));
        Ok((status, text))
    }
}

/// Forward `args` to `engine`, prepending the placeholder program-name
/// slot. Returns the engine's output text on status 0; any non-zero status
/// surfaces verbatim as `BridgeError::Engine`.
pub fn execute(engine: &dyn Engine, args: &[String]) -> Result<String, BridgeError> {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(ENGINE_ARGV0.to_string());
    argv.extend_from_slice(args);
    debug!(?argv, "invoking engine");

    match engine.invoke(&argv)? {
        (0, text) => Ok(text),
        (code, _) => {
            warn!(code, "engine returned non-zero status");
            Err(BridgeError::Engine { code })
        }
    }
}
