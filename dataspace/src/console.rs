use std::cell::RefCell;
use std::io::{self, BufRead, ErrorKind, Write};

use dataspace_modal::{Notification, Notifier};
use dialoguer::{Confirm, Error as DialoguerError};

/// Answers the yes/no question shown before a delete.
pub trait Prompt {
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

/// Interactive prompt on the controlling terminal. Ctrl-C counts as a no.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(DialoguerError::IO(err)) => Err(err),
        }
    }
}

/// Reads answers line by line from `R` and echoes the question to `W`.
/// Anything but `y`/`yes` is a no.
pub struct ScriptedPrompt<R, W> {
    input: RefCell<R>,
    echo: RefCell<W>,
}

impl<R: BufRead, W: Write> ScriptedPrompt<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self {
            input: RefCell::new(input),
            echo: RefCell::new(echo),
        }
    }

    pub fn into_echo(self) -> W {
        self.echo.into_inner()
    }
}

impl<R: BufRead, W: Write> Prompt for ScriptedPrompt<R, W> {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        {
            let mut echo = self.echo.borrow_mut();
            write!(echo, "{} [y/N] ", prompt)?;
            echo.flush()?;
        }
        let mut line = String::new();
        self.input.borrow_mut().read_line(&mut line)?;
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Terminal stand-in for the browser's dialogs and toasts.
pub struct Console<P, W> {
    prompt: P,
    output: RefCell<W>,
}

impl<P: Prompt, W: Write> Console<P, W> {
    pub fn new(prompt: P, output: W) -> Self {
        Self {
            prompt,
            output: RefCell::new(output),
        }
    }

    pub fn confirm(&self, prompt: &str) -> io::Result<bool> {
        self.prompt.confirm(prompt)
    }

    pub fn println(&self, line: &str) -> io::Result<()> {
        writeln!(self.output.borrow_mut(), "{}", line)
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.output.into_inner())
    }
}

impl<P: Prompt, W: Write> Notifier for Console<P, W> {
    fn notify(&self, notification: Notification) {
        let mark = if notification.is_success() { "✔" } else { "✘" };
        if let Err(e) = writeln!(self.output.borrow_mut(), "{} {}", mark, notification.message) {
            log::warn!("could not print notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers() {
        for (input, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("\n", false), ("", false)] {
            let prompt = ScriptedPrompt::new(input.as_bytes(), Vec::new());
            assert_eq!(prompt.confirm("Delete?").unwrap(), expected, "input {:?}", input);
            assert_eq!(prompt.into_echo(), b"Delete? [y/N] ".to_vec());
        }
    }

    #[test]
    fn test_console_asks_its_prompt() {
        let console = Console::new(ScriptedPrompt::new(&b"y\n"[..], std::io::sink()), Vec::new());
        assert!(console.confirm("Delete?").unwrap());
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_notifications_are_printed() {
        let console = Console::new(ScriptedPrompt::new(&b""[..], std::io::sink()), Vec::new());
        console.notify(Notification::success("done"));
        console.notify(Notification::error("failed"));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "✔ done\n✘ failed\n");
    }
}
