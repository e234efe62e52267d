//! Upfront validation of a whole input document
//!
//! This is the stricter check a file-intake front end runs before handing
//! text to the batch loop. The batch loop itself accepts anything.

use credsim_errors::IntakeError;

/// Accept `input` only if every non-blank line is `identifier:secret` with
/// exactly one ':', an '@' in the identifier and a non-empty secret.
/// A secret of only whitespace counts as empty, matching how the parser
/// trims it.
///
/// Returns the number of accepted lines.
///
/// # Errors
///
/// Returns `IntakeError::Empty` when there are no non-blank lines, otherwise
/// the error for the first offending line (1-based, counting blank lines).
pub fn validate_intake(input: &str) -> Result<usize, IntakeError> {
    let mut accepted = 0;
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let number = index + 1;
        let mut parts = line.split(':');
        let (Some(identifier), Some(secret), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(IntakeError::Separator { line: number });
        };
        if !identifier.contains('@') {
            return Err(IntakeError::Identifier { line: number });
        }
        if secret.trim().is_empty() {
            return Err(IntakeError::EmptySecret { line: number });
        }
        accepted += 1;
    }

    if accepted == 0 {
        return Err(IntakeError::Empty);
    }
    Ok(accepted)
}
