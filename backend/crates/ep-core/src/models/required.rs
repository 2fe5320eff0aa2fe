use crate::{CoreError, CoreResult};

/// Rejects blank required attributes.
#[track_caller]
pub(crate) fn non_empty(field: &'static str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    Ok(())
}
