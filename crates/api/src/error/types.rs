//! Error type definitions for parameter-set resolution

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// Primary error type for parameter-set resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A name did not match any canonical parameter-set name.
    ///
    /// Expected and recoverable: typically a typo in caller configuration.
    Lookup {
        context: &'static str,
        #[cfg(feature = "alloc")]
        name: String,
    },

    /// An identifier outside the closed set reached record construction.
    ///
    /// Signals a logic defect in the caller (an unchecked integer cast,
    /// a corrupted stored code), not bad user input.
    NotImplemented {
        feature: &'static str,
        code: u32,
    },
}

/// Result type for parameter-set resolution
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build a lookup failure for `name`
    pub fn lookup(context: &'static str, name: &str) -> Self {
        #[cfg(not(feature = "alloc"))]
        let _ = name;
        Self::Lookup {
            context,
            #[cfg(feature = "alloc")]
            name: String::from(name),
        }
    }

    /// Build an unimplemented-identifier fault for `code`
    pub const fn not_implemented(feature: &'static str, code: u32) -> Self {
        Self::NotImplemented { feature, code }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Lookup {
                #[cfg(feature = "alloc")]
                name,
                ..
            } => Self::Lookup {
                context,
                #[cfg(feature = "alloc")]
                name,
            },
            Self::NotImplemented { code, .. } => Self::NotImplemented {
                feature: context,
                code,
            },
        }
    }

    /// Whether the caller is expected to handle this error.
    ///
    /// Lookup misses are; unimplemented identifiers are not.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }

    /// The rejected name, if this is a lookup failure
    #[cfg(feature = "alloc")]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Lookup { name, .. } => Some(name.as_str()),
            Self::NotImplemented { .. } => None,
        }
    }

    /// The rejected numeric code, if this is an unimplemented-identifier fault
    pub const fn code(&self) -> Option<u32> {
        match self {
            Self::NotImplemented { code, .. } => Some(*code),
            Self::Lookup { .. } => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "alloc")]
            Self::Lookup { context, name } => {
                write!(f, "{}: unknown algorithm param '{}'", context, name)
            }
            #[cfg(not(feature = "alloc"))]
            Self::Lookup { context } => {
                write!(f, "{}: unknown algorithm param", context)
            }
            Self::NotImplemented { feature, code } => {
                write!(
                    f,
                    "{}: algorithm id {:#010x} does not match any known id",
                    feature, code
                )
            }
        }
    }
}
