//! Prompt seam between the session flow and the terminal.
//!
//! The session logic only talks to the [`Prompt`] trait, so tests can drive
//! it with a scripted implementation and the terminal frontend can be
//! swapped without touching the flow.

use std::io::{self, BufRead, Write};

/// Interactive dialogs the session needs.
pub trait Prompt {
    /// Free-text name entry, re-asked until non-empty. `suggestions` lists
    /// the display names of existing characters.
    fn read_name(&mut self, suggestions: &[String]) -> io::Result<String>;

    /// Single choice among `options`. `None` means the user cancelled, which
    /// aborts the whole session without persisting anything.
    fn select(
        &mut self,
        title: &str,
        text: &str,
        options: &[String],
    ) -> io::Result<Option<String>>;
}

/// Numbered-menu prompt over stdin/stdout.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn read_name(&mut self, suggestions: &[String]) -> io::Result<String> {
        if !suggestions.is_empty() {
            println!("Known names: {}", suggestions.join(", "));
        }
        let stdin = io::stdin();
        loop {
            print!("Your name?  ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed during name entry",
                ));
            }
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }

    fn select(
        &mut self,
        title: &str,
        text: &str,
        options: &[String],
    ) -> io::Result<Option<String>> {
        println!("\n{title}");
        println!("{text} (empty input cancels):");
        for (idx, option) in options.iter().enumerate() {
            println!("  {}) {option}", idx + 1);
        }
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    return Ok(Some(options[n - 1].clone()))
                }
                _ => println!("Pick a number between 1 and {}.", options.len()),
            }
        }
    }
}
