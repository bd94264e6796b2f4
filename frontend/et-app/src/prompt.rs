use std::io::{BufRead, Write};

/// Blocking user interaction: yes/no questions and one-line notices.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Prompt on the controlling terminal. Uses stderr so stdout stays clean.
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = std::io::stderr();
        if write!(stderr, "{message} [y/N] ").is_err() || stderr.flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
