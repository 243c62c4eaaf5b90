pub type Result<T> = std::result::Result<T, ChainError>;

/// Struct to represent IO errors.
#[derive(Debug)]
pub struct IoErrorStruct {
    /// What we were trying to do when the error occurred (e.g. "reading prefix file").
    context: String,

    /// The error message.
    msg: String,
}

/// Struct to represent argument/input validation errors.
#[derive(Debug)]
pub struct ValidationErrorStruct {
    /// The error message.
    msg: String,
}

/// Struct to represent a catalogue lookup for a byte outside the base64 alphabet.
#[derive(Debug)]
pub struct CatalogueErrorStruct {
    /// The offending byte.
    byte: u8,
}

/// Struct to represent the `set_lsbs` index-plus-3 overflow condition.
///
/// See `DESIGN.md` for why this is a hard error rather than a silent wrap.
#[derive(Debug)]
pub struct UnsupportedSuffixTailStruct {
    /// The base64 character that triggered the overflow.
    byte: u8,
}

/// Enum to represent the different kinds of errors `chainwrap` can produce.
#[derive(Debug)]
pub enum ChainError {
    Io(IoErrorStruct),
    Validation(ValidationErrorStruct),
    Catalogue(CatalogueErrorStruct),
    UnsupportedSuffixTail(UnsupportedSuffixTailStruct),
}

impl ChainError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        ChainError::Validation(ValidationErrorStruct { msg: msg.into() })
    }

    /// Create a new IO error tagged with the operation that failed.
    pub fn io(context: impl Into<String>, error: std::io::Error) -> Self {
        ChainError::Io(IoErrorStruct {
            context: context.into(),
            msg: error.to_string(),
        })
    }

    /// Create a new catalogue lookup error for a byte outside the base64 alphabet.
    pub fn catalogue(byte: u8) -> Self {
        ChainError::Catalogue(CatalogueErrorStruct { byte })
    }

    /// Create a new error for a suffix whose tail character pushes `set_lsbs`
    /// past the end of the base64 alphabet.
    pub fn unsupported_suffix_tail(byte: u8) -> Self {
        ChainError::UnsupportedSuffixTail(UnsupportedSuffixTailStruct { byte })
    }
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainError::Io(io_err) => {
                write!(f, "IO error while {}: {}", io_err.context, io_err.msg)
            }
            ChainError::Validation(validation_err) => {
                write!(f, "Validation error: {}", validation_err.msg)
            }
            ChainError::Catalogue(catalogue_err) => write!(
                f,
                "Catalogue error: byte {:#04x} is not in the base64 alphabet",
                catalogue_err.byte
            ),
            ChainError::UnsupportedSuffixTail(err) => write!(
                f,
                "Unsupported suffix: base64 character {:#04x} ('{}') has no room left \
                 for set_lsbs' +3 shift within the 64-entry alphabet",
                err.byte, err.byte as char
            ),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(error: std::io::Error) -> Self {
        ChainError::Io(IoErrorStruct {
            context: "performing IO".to_string(),
            msg: error.to_string(),
        })
    }
}
