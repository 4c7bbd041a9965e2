//! Line-oriented console the host provides for user feedback.

use std::io;
use std::io::Write;

pub trait Console {
    fn write_line(
        &mut self,
        line: &str,
    ) -> io::Result<()>;
}

/// Writes every line to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(
        &mut self,
        line: &str,
    ) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// Keeps every line in memory, in write order.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drains the recorded lines
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn contains(
        &self,
        needle: &str,
    ) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Console for BufferConsole {
    fn write_line(
        &mut self,
        line: &str,
    ) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
