//! Operator confirmation before submission.

use crate::error::ClaimError;
use std::io::{self, BufRead, Write};

pub const CONFIRM_PROMPT: &str = "do you want to really send transaction? (yes/no): ";

/// Asks the operator whether the signed transaction may be sent.
pub trait Confirmation {
	/// Shows the values the operator is asked to approve.
	fn review(&mut self, text: &str) -> Result<(), ClaimError>;

	/// Returns true only on an explicit approval.
	fn confirm(&mut self, prompt: &str) -> Result<bool, ClaimError>;
}

/// Line-based prompt. Only the exact answer `yes` approves.
pub struct PromptConfirmation<R, W> {
	input: R,
	output: W,
}

impl PromptConfirmation<io::StdinLock<'static>, io::Stdout> {
	/// Prompt on the process's stdout, reading the answer from stdin.
	pub fn stdin() -> Self {
		Self::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> PromptConfirmation<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}
}

impl<R: BufRead, W: Write> Confirmation for PromptConfirmation<R, W> {
	fn review(&mut self, text: &str) -> Result<(), ClaimError> {
		self.output.write_all(text.as_bytes())?;
		self.output.flush()?;
		Ok(())
	}

	fn confirm(&mut self, prompt: &str) -> Result<bool, ClaimError> {
		self.output.write_all(prompt.as_bytes())?;
		self.output.flush()?;

		let mut answer = String::new();
		// EOF leaves the answer empty
		self.input.read_line(&mut answer)?;

		let answer = answer.strip_suffix('\n').unwrap_or(answer.as_str());
		let answer = answer.strip_suffix('\r').unwrap_or(answer);
		Ok(answer == "yes")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn answer(input: &str) -> (bool, String) {
		let mut output = Vec::new();
		let confirmed = PromptConfirmation::new(Cursor::new(input.as_bytes()), &mut output)
			.confirm(CONFIRM_PROMPT)
			.unwrap();
		(confirmed, String::from_utf8(output).unwrap())
	}

	#[test]
	fn test_exact_yes_confirms() {
		assert!(answer("yes\n").0);
		assert!(answer("yes").0);
		assert!(answer("yes\r\n").0);
	}

	#[test]
	fn test_anything_else_declines() {
		for input in ["no\n", "\n", "", "y\n", "YES\n", " yes\n", "yes please\n"] {
			assert!(!answer(input).0, "input {:?} should decline", input);
		}
	}

	#[test]
	fn test_prompt_is_written() {
		let (_, output) = answer("no\n");
		assert_eq!(output, CONFIRM_PROMPT);
	}

	#[test]
	fn test_review_precedes_prompt() {
		let mut output = Vec::new();
		let mut prompt = PromptConfirmation::new(Cursor::new("yes\n".as_bytes()), &mut output);
		prompt.review("Payload: [0x1]\n").unwrap();
		assert!(prompt.confirm(CONFIRM_PROMPT).unwrap());

		let output = String::from_utf8(output).unwrap();
		assert_eq!(output, format!("Payload: [0x1]\n{}", CONFIRM_PROMPT));
	}

	#[test]
	fn test_reads_a_single_line() {
		let mut output = Vec::new();
		let mut prompt = PromptConfirmation::new(Cursor::new("no\nyes\n".as_bytes()), &mut output);
		assert!(!prompt.confirm(CONFIRM_PROMPT).unwrap());
		assert!(prompt.confirm(CONFIRM_PROMPT).unwrap());
	}
}
