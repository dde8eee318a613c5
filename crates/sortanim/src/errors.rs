//! Error handling and exit codes.

use sortanim_core::exit_codes;
use sortanim_core::SortError;
use sortanim_orchestration::{all_completed, RunReport};

/// Map an application error to a process exit code.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<SortError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code_for_sort_error)
}

/// Map a sort error to a process exit code.
#[must_use]
pub fn exit_code_for_sort_error(error: &SortError) -> i32 {
    match error {
        SortError::Cancelled | SortError::Interrupted(_) => exit_codes::ERROR_CANCELED,
        SortError::InvalidCount(_) | SortError::Config(_) => exit_codes::ERROR_CONFIG,
        SortError::RunActive | SortError::NoSequence => exit_codes::ERROR_GENERIC,
    }
}

/// Success only when every requested run completed.
#[must_use]
pub fn exit_code_for_reports(reports: &[RunReport]) -> i32 {
    if all_completed(reports) {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR_CANCELED
    }
}
