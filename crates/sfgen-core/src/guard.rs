//! Overwrite protection for an existing target directory.

use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;

pub const AFFIRMATIVE: &str = "yes";
pub const NEGATIVE: &str = "no";

const REPROMPT: &str = "Please type yes or no and then press enter:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

/// Asks the operator a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Confirmation over a line-oriented console.
///
/// Only the exact answers `yes` and `no` are accepted; anything else
/// re-prompts. End of input counts as `no`.
pub struct ConsoleConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsoleConfirm<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsoleConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim() {
                AFFIRMATIVE => return Ok(true),
                NEGATIVE => return Ok(false),
                _ => {
                    write!(self.output, "{REPROMPT}")?;
                    self.output.flush()?;
                }
            }
        }
    }
}

/// Proceed when `target_dir` is free, otherwise only on explicit operator
/// approval.
pub fn check(target_dir: &Path, confirm: &mut dyn Confirm) -> Result<Decision> {
    if !target_dir.exists() {
        return Ok(Decision::Proceed);
    }
    let prompt = format!(
        "[ERRO] Path ({}) already exists\n[WARN] Do you want to overwrite it? [yes|no]",
        target_dir.display()
    );
    if confirm.confirm(&prompt)? {
        Ok(Decision::Proceed)
    } else {
        Ok(Decision::Abort)
    }
}
