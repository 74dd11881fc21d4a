use core::fmt;

#[cfg(all(debug_assertions, feature = "alloc"))]
use alloc::boxed::Box;

/// Why some bytes could not be interpreted as the requested MIDI message.
///
/// Only the fallible (`try_*`) constructors and refinements produce errors. Their panicking
/// counterparts treat the same conditions as violated preconditions.
///
/// In debug builds with the `alloc` feature, errors remember the lower-level error they were
/// raised from, reachable through `Error::source`. Otherwise an error is a single pointer to a
/// static `ErrorKind` and `source` is always `None`.
///
/// If the `std` feature is enabled, this type implements `std::error::Error`.
#[derive(Clone)]
pub struct Error {
    kind: &'static ErrorKind,
    #[cfg(all(debug_assertions, feature = "alloc"))]
    cause: Option<Box<Error>>,
}
impl Error {
    /// Create a new error with the given `ErrorKind`.
    #[inline]
    pub fn new(kind: &'static ErrorKind) -> Error {
        Error {
            kind,
            #[cfg(all(debug_assertions, feature = "alloc"))]
            cause: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        *self.kind
    }

    /// The lower-level error this one was raised from.
    ///
    /// Always `None` in release builds, since the chain is not tracked there.
    #[inline]
    pub fn source(&self) -> Option<&Error> {
        self.cause()
    }
}
#[cfg(all(debug_assertions, feature = "alloc"))]
impl Error {
    #[inline]
    fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// Wrap this error into a higher-level `ctx` error.
    #[inline]
    fn within(self, ctx: &'static ErrorKind) -> Error {
        Error {
            kind: ctx,
            cause: Some(Box::new(self)),
        }
    }
}
#[cfg(not(all(debug_assertions, feature = "alloc")))]
impl Error {
    #[inline]
    fn cause(&self) -> Option<&Error> {
        None
    }

    #[inline]
    fn within(self, ctx: &'static ErrorKind) -> Error {
        Error::new(ctx)
    }
}
impl From<&'static ErrorKind> for Error {
    #[inline]
    fn from(kind: &'static ErrorKind) -> Error {
        Error::new(kind)
    }
}
impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.kind, f)
    }
}
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        let mut cause = self.source();
        while let Some(err) = cause {
            write!(f, "\n  caused by: {}", err.kind)?;
            cause = err.source();
        }
        Ok(())
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Error::source(self).map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// The class of a message error, with a short non-normative description.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bytes are not one complete MIDI message: missing or undefined status byte, a data
    /// byte count that does not match the status, a data byte with its top bit set, or a SysEx
    /// message without its final `0xF7`.
    Malformed(&'static str),

    /// The bytes are a complete message, but not of the requested kind (for example, a Control
    /// Change refined into a note message).
    Mismatch(&'static str),
}
impl ErrorKind {
    /// The description of what went wrong.
    #[inline]
    pub fn message(&self) -> &'static str {
        match *self {
            ErrorKind::Malformed(msg) | ErrorKind::Mismatch(msg) => msg,
        }
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, ErrorKind::Malformed(_))
    }

    #[inline]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ErrorKind::Mismatch(_))
    }
}
impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let class = match self {
            ErrorKind::Malformed(_) => "malformed",
            ErrorKind::Mismatch(_) => "mismatched",
        };
        write!(f, "{} midi message: {}", class, self.message())
    }
}

macro_rules! err_malformed {
    ($msg:expr) => {{
        const KIND: &'static ErrorKind = &ErrorKind::Malformed($msg);
        KIND
    }};
}
macro_rules! err_mismatch {
    ($msg:expr) => {{
        const KIND: &'static ErrorKind = &ErrorKind::Mismatch($msg);
        KIND
    }};
}

/// Attach a higher-level error to a failed check.
pub(crate) trait ResultExt<T> {
    fn context(self, ctx: &'static ErrorKind) -> StdResult<T, Error>;
}
impl<T> ResultExt<T> for StdResult<T, Error> {
    #[inline]
    fn context(self, ctx: &'static ErrorKind) -> StdResult<T, Error> {
        self.map_err(|err| err.within(ctx))
    }
}
impl<T> ResultExt<T> for StdResult<T, &'static ErrorKind> {
    #[inline]
    fn context(self, ctx: &'static ErrorKind) -> StdResult<T, Error> {
        self.map_err(|kind| Error::new(kind).within(ctx))
    }
}

/// Unwrap the result of a refinement whose success is a precondition of the caller.
#[track_caller]
pub(crate) fn precondition<T>(res: Result<T>) -> T {
    match res {
        Ok(val) => val,
        Err(err) => panic!("precondition violated: {:?}", err),
    }
}

/// The result type used by fallible message constructors.
pub type Result<T> = StdResult<T, Error>;
pub(crate) use core::result::Result as StdResult;
