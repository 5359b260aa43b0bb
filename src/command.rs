use crate::error::{BumpError, Result};
use log::{debug, info};
use std::process::Command;

pub const DEFAULT_WRITE_COMMAND: &str = "poetry version";

pub trait CommandRunner {
    /// Runs `program` with `args` to completion; a non-zero exit is an error.
    fn run(&self, program: &str, args: &[String]) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        debug!("Running {} {:?}", program, args);
        let status = Command::new(program).args(args).status()?;
        if !status.success() {
            return Err(BumpError::CommandFailed {
                command: display_command(program, args),
                status,
            });
        }
        Ok(())
    }
}

/// The command that persists a version into the manifest, e.g. `poetry version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionWriteCommand {
    program: String,
    args: Vec<String>,
}

impl VersionWriteCommand {
    pub fn parse(command_line: &str) -> Result<Self> {
        let mut words = shlex::split(command_line)
            .ok_or_else(|| BumpError::InvalidCommand(command_line.to_string()))?
            .into_iter();
        let program = words
            .next()
            .ok_or_else(|| BumpError::InvalidCommand(command_line.to_string()))?;
        Ok(VersionWriteCommand { program, args: words.collect() })
    }

    /// Invokes the command with `version` appended as its last argument.
    pub fn write(&self, runner: &impl CommandRunner, version: &str) -> Result<()> {
        let mut args = self.args.clone();
        args.push(version.to_string());
        info!("Writing version {} with `{}`", version, display_command(&self.program, &args));
        runner.run(&self.program, &args)
    }
}

fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
