//! Console capability for host-side programs.
//!
//! Recorded trees never touch this: the builder turns console reads and
//! writes into named variables and `printLn` nodes. Host code that
//! actually wants a terminal goes through [`Console`], so tests can
//! swap in a scripted double.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// The side-effect seam for console input and output.
pub trait Console {
    /// Read one line, without its trailing newline.
    fn read_line(&self) -> io::Result<String>;
    /// Write one line, appending a newline.
    fn print_line(&self, line: &str) -> io::Result<()>;
}

/// Real stdin and stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn print_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    }
}

/// Scripted inputs and captured outputs, for tests.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: RefCell<Vec<String>>,
    outputs: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    /// A console that answers reads from `inputs` in order.
    pub fn with_inputs(inputs: &[&str]) -> Self {
        let mut stack: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        stack.reverse();
        ScriptedConsole {
            inputs: RefCell::new(stack),
            outputs: RefCell::new(Vec::new()),
        }
    }

    /// Lines printed so far, oldest first.
    pub fn outputs(&self) -> Vec<String> {
        self.outputs.borrow().clone()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&self) -> io::Result<String> {
        self.inputs
            .borrow_mut()
            .pop()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "console script exhausted"))
    }

    fn print_line(&self, line: &str) -> io::Result<()> {
        self.outputs.borrow_mut().push(line.to_string());
        Ok(())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
