//! Line-oriented input parsing

use credsim_types::CredentialRecord;

/// Non-blank lines of `input`, in order
///
/// Lines that are empty or whitespace-only are skipped; `\r\n` endings are
/// handled by the trimming the record constructor applies.
pub fn credential_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.trim().is_empty())
}

/// Parse every non-blank line into a record
///
/// Never fails: a line without a usable identifier or secret still becomes a
/// record and is reported as "Invalid format" by the batch loop.
#[must_use]
pub fn parse_records(input: &str) -> Vec<CredentialRecord> {
    credential_lines(input)
        .map(CredentialRecord::from_line)
        .collect()
}
