use crate::accumulator::Width;
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // --------------------------------- input errors ----------------------------------------------
    #[error("`{input}` is not a valid {width} integer: {source}")]
    InvalidInteger {
        input: String,
        width: Width,
        source: ParseIntError,
    },
    #[error("input interrupted")]
    Interrupted,
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    IO(#[from] std::io::Error),

    // --------------------------------- configuration errors --------------------------------------
    #[error("unknown width `{0}`, expected `i32` or `i64`")]
    UnknownWidth(String),
    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Return true if the user may retry the input that caused this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InvalidInteger { .. })
    }
}

#[macro_export]
macro_rules! _error {
    ($log_fn: path, $res: expr) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "trisum", "{:#}", e);
                None
            }
        }
    };
    ($log_fn: path, $res: expr, $msg: tt) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "trisum", concat!($msg, " {:#}"), e);
                None
            }
        }
    };
}

/// Transforms `Result` into `Option` and logs an error if it occurs.
#[macro_export]
macro_rules! weak_error {
    ($res: expr) => {
        $crate::_error!(log::warn, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(log::warn, $res, $msg)
    };
}

/// Transforms `Result` into `Option` and put error into debug logs if it occurs.
#[macro_export]
macro_rules! muted_error {
    ($res: expr) => {
        $crate::_error!(log::debug, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(log::debug, $res, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_integer_message() {
        let err = Error::InvalidInteger {
            input: "abc".to_string(),
            width: Width::W32,
            source: "abc".parse::<i32>().unwrap_err(),
        };
        assert_eq!(
            err.to_string(),
            "`abc` is not a valid i32 integer: invalid digit found in string"
        );
        assert!(err.is_recoverable());
        assert!(!Error::Interrupted.is_recoverable());
    }

    #[test]
    fn test_weak_error() {
        let ok: Result<u8, Error> = Ok(1);
        assert_eq!(weak_error!(ok), Some(1));
        let err: Result<u8, Error> = Err(Error::Interrupted);
        assert_eq!(muted_error!(err, "read failed:"), None);
    }
}
