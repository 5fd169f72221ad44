use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FsmError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl FsmError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FsmError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type FsmResult<T> = Result<T, FsmError>;
