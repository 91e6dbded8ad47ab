/// Shorthand for a conversion result.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that a conversion can surface to the caller.
///
/// Malformed text never produces one of these: the "try" functions report it
/// through their boolean flag and the "parse" functions through a sentinel
/// value. Only input that is absent entirely is escalated.
pub enum ConvertError {
    /// The input text was absent where a value was required.
    MissingInput {
        /// The name of the absent parameter.
        param: &'static str,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput { param } => {
                write!(f, "Missing input: parameter '{param}' must not be absent.")
            },
        }
    }
}

impl std::error::Error for ConvertError {}
