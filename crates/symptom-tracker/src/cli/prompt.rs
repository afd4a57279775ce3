//! Line-oriented entry form for `symtrack add --interactive`.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::Result;
use crate::labels::Labels;
use crate::record::parse_date;
use crate::tracker::EntryForm;

/// How an interactive entry ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user confirmed; the form holds the record to save.
    Submitted,
    /// Input ended or the user declined; nothing should be saved.
    Cancelled,
}

/// Fill `form` from `input`, writing prompts to `output`.
///
/// An empty answer keeps the value already in the form. An invalid date or a
/// non-integer level asks again. Integer levels outside 1-10 are pulled to
/// the nearest bound, like a slider. The last prompt confirms the save; an
/// empty answer or `y` submits, anything else cancels.
///
/// End of input at any prompt cancels the entry.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn prompt_entry<R: BufRead, W: Write>(
    form: &mut EntryForm,
    labels: &Labels,
    input: &mut R,
    output: &mut W,
) -> Result<PromptOutcome> {
    writeln!(output, "{}", labels.form_title)?;

    loop {
        let Some(answer) = ask(input, output, labels.date, &form.date().to_string())? else {
            return cancelled(output);
        };
        if answer.is_empty() {
            break;
        }
        match parse_date(&answer) {
            Ok(date) => {
                form.set_date(date);
                break;
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    loop {
        let Some(answer) = ask(input, output, labels.level_field, &form.level().to_string())?
        else {
            return cancelled(output);
        };
        if answer.is_empty() {
            break;
        }
        match answer.parse::<i64>() {
            Ok(value) => {
                let level = form.set_level_clamped(value);
                if i64::from(level.get()) != value {
                    warn!(input = value, level = level.get(), "Level pulled into range");
                }
                break;
            }
            Err(_) => writeln!(output, "{answer}: 1-10")?,
        }
    }

    let Some(answer) = ask(input, output, labels.save_action, "Y/n")? else {
        return cancelled(output);
    };
    if answer.is_empty() || answer.eq_ignore_ascii_case("y") {
        Ok(PromptOutcome::Submitted)
    } else {
        debug!(answer = %answer, "Entry declined");
        Ok(PromptOutcome::Cancelled)
    }
}

/// Finish the prompt line left open by [`ask`] and report cancellation.
fn cancelled<W: Write>(output: &mut W) -> Result<PromptOutcome> {
    writeln!(output)?;
    debug!("Input closed before the entry was confirmed");
    Ok(PromptOutcome::Cancelled)
}

/// Print `label [current]: ` and read one trimmed line. `None` at end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<Option<String>> {
    write!(output, "{label} [{current}]: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::labels::Language;
    use crate::record::Level;

    fn form() -> EntryForm {
        EntryForm::new(parse_date("2024-01-01").unwrap(), Level::DEFAULT)
    }

    fn run(form: &mut EntryForm, answers: &str) -> (PromptOutcome, String) {
        let labels = Labels::for_language(Language::Ja);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = prompt_entry(form, labels, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_date_and_level() {
        let mut form = form();
        let (outcome, _) = run(&mut form, "2024-01-05\n7\n\n");

        assert_eq!(outcome, PromptOutcome::Submitted);
        assert_eq!(form.date().to_string(), "2024-01-05");
        assert_eq!(form.level().get(), 7);
    }

    #[test]
    fn test_empty_answers_keep_defaults() {
        let mut form = form();
        let (outcome, out) = run(&mut form, "\n\ny\n");

        assert_eq!(outcome, PromptOutcome::Submitted);
        assert_eq!(form, self::form());
        assert!(out.contains("日付 [2024-01-01]: "));
        assert!(out.contains("症状の程度 (1-10) [5]: "));
        assert!(out.contains("記録を保存 [Y/n]: "));
    }

    #[test]
    fn test_invalid_date_asks_again() {
        let mut form = form();
        let (_, out) = run(&mut form, "2024-02-30\n2024-02-29\n\n\n");

        assert_eq!(form.date().to_string(), "2024-02-29");
        assert!(out.contains("invalid date '2024-02-30'"));
    }

    #[test]
    fn test_level_is_clamped() {
        let mut form = form();
        run(&mut form, "\n42\n\n");
        assert_eq!(form.level(), Level::MAX);

        let mut form = self::form();
        run(&mut form, "\n-3\n\n");
        assert_eq!(form.level(), Level::MIN);
    }

    #[test]
    fn test_non_integer_level_asks_again() {
        let mut form = form();
        run(&mut form, "\nhigh\n2\n\n");
        assert_eq!(form.level().get(), 2);
    }

    #[test]
    fn test_closed_input_cancels() {
        let mut form = form();
        let (outcome, out) = run(&mut form, "");

        assert_eq!(outcome, PromptOutcome::Cancelled);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_input_closed_mid_entry_cancels() {
        let mut form = form();
        let (outcome, _) = run(&mut form, "2024-03-03\n");
        assert_eq!(outcome, PromptOutcome::Cancelled);

        let mut form = self::form();
        let (outcome, _) = run(&mut form, "2024-03-03\n4\n");
        assert_eq!(outcome, PromptOutcome::Cancelled);
    }

    #[test]
    fn test_declining_confirmation_cancels() {
        let mut form = form();
        let (outcome, _) = run(&mut form, "\n\nn\n");
        assert_eq!(outcome, PromptOutcome::Cancelled);
    }
}
