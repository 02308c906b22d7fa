use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by `save` and `load`.
///
/// Archives restore their truncation/erasure invariants before any of these
/// is returned: the output buffer is trimmed to the logical size, and the
/// consuming input archive erases exactly the bytes of the values that were
/// fully loaded before the failure. There is no rollback of partially
/// processed values.
#[derive(Error, Debug)]
pub enum Error {
	/// The input archive cannot satisfy a read.
	///
	/// No bytes of the failing item are consumed; the caller may reset the
	/// archive and retry once more data is available.
	#[error("input too short: needed {needed} byte(s), {available} available")]
	OutOfRange { needed: usize, available: usize },

	/// Polymorphic registry lookup missed, either by dynamic type on save or
	/// by id on load. Register the type and retry.
	#[error("type is not registered for polymorphic serialization")]
	UnregisteredType,

	/// A null owning pointer (`Option::None`) was passed to save.
	#[error("attempt to serialize a null owning pointer")]
	NullPointer,

	/// Load produced a concrete type that is not registered as the requested
	/// base.
	#[error("loaded type is not assignable to the requested polymorphic base")]
	TypeMismatch,

	/// A container held more elements than the 32-bit count prefix can carry.
	#[error("container length {0} exceeds the 32-bit count prefix")]
	LengthOverflow(usize),

	/// The input held a byte pattern that `save` can never produce for the
	/// named type, e.g. an invalid `char` or an unknown enum discriminant.
	#[error("invalid encoded value for {0}")]
	InvalidValue(&'static str),

	/// A string payload was not valid UTF-8.
	#[error("string payload is not valid UTF-8")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),
}
