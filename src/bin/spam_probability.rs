use mlmath::prompt::prompt_non_negative;
use mlmath::{Result, SpamCounts};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn read_counts<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SpamCounts> {
    writeln!(output, "Enter the following details:")?;
    let total_emails = prompt_non_negative(input, output, "Total emails: ")?;
    let emails_with_free = prompt_non_negative(input, output, "Emails containing 'free': ")?;
    let spam_emails = prompt_non_negative(input, output, "Spam emails: ")?;
    let spam_and_free = prompt_non_negative(input, output, "Emails that are both spam and contain 'free': ")?;

    Ok(SpamCounts::new(total_emails, emails_with_free, spam_emails, spam_and_free))
}

fn main() -> ExitCode {
    mlmath::logging::init_tracing();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let result = read_counts(&mut input, &mut output).and_then(|counts| counts.spam_given_free());
    match result {
        Ok(breakdown) => {
            println!("\n{breakdown}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
