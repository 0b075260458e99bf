//! Line transform trait, and its implementation over an external process.
use std::{
    io::{BufRead, BufReader, Write},
    process::{Child, ChildStdin, ChildStdout, Command, Stdio},
};

use crate::error::Error;

/// A line-oriented, stateful transformation: lines are written in, transformed lines are read out.
pub trait LineTransform {
    /// Write a line. A newline is appended.
    fn write_line(&mut self, line: &str) -> Result<(), Error>;

    /// Read a line, without its trailing newline.
    /// Returns [None] once the output is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, Error>;
}

impl<T: LineTransform + ?Sized> LineTransform for Box<T> {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        (**self).write_line(line)
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        (**self).read_line()
    }
}

/// External command, fed through its standard input and read from its standard output.
///
/// Every written line is flushed immediately, so the command can be driven in lock-step.
/// The child is killed when [Process] is dropped.
pub struct Process {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl Process {
    /// Spawn a command given as a whitespace separated string (program followed by arguments).
    pub fn spawn(command: &str) -> Result<Self, Error> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::Splitter("empty command".to_string()))?;

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        let stdin = child.stdin.take();
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| Error::Splitter("could not capture stdout".to_string()))?;

        debug!("spawned {:?} (pid {})", command, child.id());
        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }
}

impl LineTransform for Process {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| Error::Splitter("stdin is closed".to_string()))?;
        stdin.write_all(line.as_bytes())?;
        stdin.write_all(b"\n")?;
        stdin.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        match self.stdout.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())),
        }
    }
}

impl Drop for Process {
    fn drop(&mut self) {
        // closing stdin first lets well-behaved commands exit by themselves
        self.stdin.take();
        if let Err(e) = self.child.kill() {
            debug!("could not kill {}: {}", self.child.id(), e);
        }
        if let Err(e) = self.child.wait() {
            warn!("could not wait for {}: {}", self.child.id(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LineTransform, Process};
    use crate::error::Error;

    #[test]
    fn empty_command() {
        assert!(matches!(Process::spawn("   "), Err(Error::Splitter(_))));
    }

    #[test]
    fn missing_command() {
        assert!(matches!(
            Process::spawn("this-command-does-not-exist-hopefully"),
            Err(Error::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn lock_step() {
        let mut p = Process::spawn("cat").unwrap();
        p.write_line("hello").unwrap();
        assert_eq!(p.read_line().unwrap(), Some("hello".to_string()));
        p.write_line("world").unwrap();
        p.write_line("").unwrap();
        assert_eq!(p.read_line().unwrap(), Some("world".to_string()));
        assert_eq!(p.read_line().unwrap(), Some("".to_string()));
    }
}
