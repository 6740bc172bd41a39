//! Read-validate-reprompt loop for non-negative integers.
//!
//! Generic over `BufRead`/`Write` so the loop runs against stdin/stdout in the
//! binary and against in-memory buffers in tests.

use crate::error::{MlMathError, Result};
use std::io::{BufRead, Write};

#[derive(Clone, Debug, PartialEq, Eq)]
enum PromptState {
    AwaitingInput,
    Rejected(String),
    Validated(u64),
}

fn classify(line: &str) -> PromptState {
    match line.trim().parse::<i64>() {
        Ok(value) if value < 0 => PromptState::Rejected("Value must be non-negative.".to_string()),
        Ok(value) => PromptState::Validated(value as u64),
        Err(e) => PromptState::Rejected(format!("{e}")),
    }
}

/// Prompts until a non-negative integer is entered.
///
/// Fails with `InvalidInput` only when the input ends before a valid value.
pub fn prompt_non_negative<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<u64>
where
    R: BufRead,
    W: Write,
{
    let mut state = PromptState::AwaitingInput;
    loop {
        state = match state {
            PromptState::AwaitingInput => {
                write!(output, "{prompt}")?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Err(MlMathError::InvalidInput(format!(
                        "input ended before a value was entered for '{}'",
                        prompt.trim_end_matches([':', ' '])
                    )));
                }
                classify(&line)
            }
            PromptState::Rejected(reason) => {
                writeln!(output, "Invalid input. {reason}")?;
                tracing::debug!(%reason, "rejected prompt input");
                PromptState::AwaitingInput
            }
            PromptState::Validated(value) => return Ok(value),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_first_valid_value() {
        let mut input = Cursor::new("42\n");
        let mut output = Vec::new();

        let value = prompt_non_negative(&mut input, &mut output, "Total emails: ").unwrap();
        assert_eq!(value, 42);
        assert_eq!(String::from_utf8(output).unwrap(), "Total emails: ");
    }

    #[test]
    fn test_retries_after_negative_and_garbage() {
        let mut input = Cursor::new("-3\nabc\n  7 \n");
        let mut output = Vec::new();

        let value = prompt_non_negative(&mut input, &mut output, "> ").unwrap();
        assert_eq!(value, 7);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("> ").count(), 3);
        assert!(transcript.contains("Invalid input. Value must be non-negative."));
        assert_eq!(transcript.matches("Invalid input.").count(), 2);
    }

    #[test]
    fn test_zero_is_accepted() {
        let mut input = Cursor::new("0\n");
        let value = prompt_non_negative(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_end_of_input() {
        let mut input = Cursor::new("-1\n");
        let err = prompt_non_negative(&mut input, &mut Vec::new(), "Spam emails: ").unwrap_err();
        assert!(matches!(err, MlMathError::InvalidInput(_)));
        assert!(err.to_string().contains("Spam emails"));
    }
}
