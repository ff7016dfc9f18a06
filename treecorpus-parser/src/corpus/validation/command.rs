//! Grammar engine backed by an external program
//!
//!     Each record's code is written to the program's stdin and whatever it prints on stdout is
//!     the rendered tree. A non-zero exit status rejects the code, with stderr as the message.
//!
//!     Calls run on a private current-thread tokio runtime and are awaited one at a time. With a
//!     timeout set, a call that runs over is abandoned and the child process killed.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use super::engine::{EngineError, GrammarEngine};
use crate::corpus::error::{CorpusError, CorpusResult};

/// How to start the engine program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The captured stdout of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTree(pub String);

#[derive(Debug)]
pub struct CommandEngine {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
    runtime: Runtime,
}

impl CommandEngine {
    /// Resolve the program and prepare the runtime. Fails with [CorpusError::EngineLoad] when the
    /// program cannot be found.
    pub fn load(spec: CommandSpec) -> CorpusResult<Self> {
        if spec.program.trim().is_empty() {
            return Err(CorpusError::EngineLoad(
                "no engine command configured".into(),
            ));
        }
        let program = which::which(&spec.program)
            .map_err(|e| CorpusError::EngineLoad(format!("{}: {}", spec.program, e)))?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CorpusError::EngineLoad(format!("runtime: {}", e)))?;
        debug!(program = %program.display(), args = ?spec.args, "loaded command engine");
        Ok(Self {
            program,
            args: spec.args,
            timeout: spec.timeout,
            runtime,
        })
    }

    async fn run(&self, source: &str) -> Result<String, EngineError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_error)?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Parse("engine stdin unavailable".into()))?;
        let feed = async move {
            let written = stdin.write_all(source.as_bytes()).await;
            drop(stdin);
            written
        };
        let (written, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| EngineError::Parse(e.to_string()))?;
        if let Err(e) = written {
            // Engines are free to ignore their input.
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(EngineError::Parse(e.to_string()));
            }
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::Parse(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|_| EngineError::Render("engine output is not valid UTF-8".into()))
    }
}

fn spawn_error(err: std::io::Error) -> EngineError {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => {
            EngineError::Unavailable(err.to_string())
        }
        _ => EngineError::Parse(err.to_string()),
    }
}

impl GrammarEngine for CommandEngine {
    type Tree = CommandTree;

    fn parse(&self, source: &str) -> Result<CommandTree, EngineError> {
        let rendered = self.runtime.block_on(async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, self.run(source))
                    .await
                    .map_err(|_| EngineError::Timeout(limit))?,
                None => self.run(source).await,
            }
        })?;
        Ok(CommandTree(rendered))
    }

    fn render(&self, tree: &CommandTree) -> Result<String, EngineError> {
        Ok(tree.0.clone())
    }
}
