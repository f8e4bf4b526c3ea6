use dialoguer::Confirm;
use pmpts_core::ops::ConfirmPolicy;
use std::io::{self, IsTerminal};

/// Asks yes/no questions on the terminal, defaulting to no. When stdin is
/// not a terminal the question is declined, so scripted invocations must
/// pass the force/yes flags explicitly.
pub struct TtyConfirm;

impl ConfirmPolicy for TtyConfirm {
    fn confirm(&self, question: &str) -> bool {
        if !io::stdin().is_terminal() {
            return false;
        }
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
