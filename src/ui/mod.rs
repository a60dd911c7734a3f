//! Terminal UI helpers shared by the interactive commands.

use anyhow::Result;
use inquire::InquireError;

mod style;

pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Converts a prompt result into `Ok(None)` when the user pressed Esc or Ctrl+C.
pub fn answer_or_cancel<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(answer) => Ok(Some(answer)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Runs an interactive flow, treating user cancellation as a clean exit.
///
/// On cancellation a newline is printed to tidy the terminal and `Ok(())`
/// is returned instead of the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        other => other,
    }
}

/// Prints an error line to stderr followed by a blank line.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_or_cancel_passes_answer() {
        let answer = answer_or_cancel(Ok::<_, InquireError>("saen")).unwrap();
        assert_eq!(answer, Some("saen"));
    }

    #[test]
    fn test_answer_or_cancel_cancelled() {
        let answer = answer_or_cancel::<String>(Err(InquireError::OperationCanceled)).unwrap();
        assert!(answer.is_none());

        let answer = answer_or_cancel::<String>(Err(InquireError::OperationInterrupted)).unwrap();
        assert!(answer.is_none());
    }

    #[test]
    fn test_answer_or_cancel_other_error() {
        let result = answer_or_cancel::<String>(Err(InquireError::Custom("boom".into())));
        assert!(result.is_err());
    }

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        assert!(handle_prompt_cancellation(|| Ok(())).is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_canceled() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("Mappings file is broken")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Mappings file is broken"));
    }
}
