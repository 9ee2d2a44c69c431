// src/exit.rs
//! Process exit codes for `ranker`.

use std::process::Termination;

use crate::error::RankerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankerExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, numeric failure).
    Error = 1,
    /// Bad graph text, config file, or setting.
    InvalidInput = 2,
}

impl RankerExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Chooses the exit code for a failed command.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankerError>() {
            Some(
                RankerError::InvalidSetting { .. }
                | RankerError::InvalidDamping(_)
                | RankerError::UnknownNode(_)
                | RankerError::IndexOutOfRange { .. }
                | RankerError::ConfigParse(_),
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for RankerExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
