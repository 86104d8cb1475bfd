//! Line-based terminal implementation of [`Interaction`]
//!
//! End of input cancels whatever is being asked. A blank answer accepts the
//! default for text prompts and cancels pickers.

use crate::config::expand_home;
use copycat_core::copycat_scanner::Extension;
use copycat_core::{Interaction, Prompt, ValidationError};
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct TerminalInteraction<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` on end of input or a read error
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()),
        }
    }

    // Output failures are not actionable mid-prompt
    fn print(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn pick_extension(&mut self, extensions: &[Extension]) -> Option<usize> {
        self.print(format_args!("Pick a target extension:\n"));
        for (i, ext) in extensions.iter().enumerate() {
            self.print(format_args!("  {:>3}) {}\n", i + 1, ext.label()));
        }

        loop {
            self.print(format_args!(
                "Extension number [1-{}] (blank to cancel): ",
                extensions.len()
            ));
            let line = self.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=extensions.len()).contains(&n) => return Some(n - 1),
                _ => self.print(format_args!(
                    "Enter a number between 1 and {}.\n",
                    extensions.len()
                )),
            }
        }
    }

    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        self.print(format_args!("{} [{}]: ", prompt.title, prompt.default));
        let line = self.read_line()?;
        if line.is_empty() {
            return Some(prompt.default.clone());
        }
        Some(line)
    }

    fn reject(&mut self, _prompt: &Prompt, error: &ValidationError) {
        self.print(format_args!("  {error}\n"));
    }

    fn pick_folder(&mut self, title: &str) -> Option<PathBuf> {
        loop {
            self.print(format_args!("{title} (blank to cancel): "));
            let line = self.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let path = expand_home(&PathBuf::from(line));
            if path.is_dir() {
                return Some(path);
            }
            self.print(format_args!("  Not a directory: {}\n", path.display()));
        }
    }

    fn confirm(&mut self, title: &str) -> Option<bool> {
        self.print(format_args!("{title} [y/N]: "));
        let line = self.read_line()?;
        let answer = line.trim();
        Some(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn notify(&mut self, message: &str) {
        self.print(format_args!("{message}\n"));
    }
}
