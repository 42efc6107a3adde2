use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field `{0}` is required")]
    Missing(&'static str),
    #[error("field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("field `{field}` must match {pattern}, got {value:?}")]
    Pattern {
        field: &'static str,
        pattern: &'static str,
        value: String,
    },
    #[error("Actuator devices must define at least one command.")]
    NoCommands,
}

pub(crate) fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(value)
}

pub(crate) fn required_str(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    non_empty(field, required(field, value)?)
}

pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing(field))
}
