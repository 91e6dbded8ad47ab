#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the result of a single conversion attempt.
///
/// Every conversion classifies its input into exactly one of these variants
/// before any caller-facing shape is produced. The "try" and "parse"
/// functions are projections of this type.
pub enum Outcome<T> {
    /// The text was a well-formed number within the representable range.
    Value(T),
    /// The text did not follow the numeric grammar of the target type.
    Malformed,
    /// The text was numeric but outside the representable range.
    Overflow,
    /// No text was supplied at all.
    Missing,
}

impl<T: Default> Outcome<T> {
    /// Projects the outcome into the try-pattern shape.
    ///
    /// Success yields `(true, value)`. Every failure, including missing
    /// input, yields `(false, zero)` without raising an error.
    ///
    /// # Returns
    /// - `(true, value)`: The parsed value, if the conversion succeeded.
    /// - `(false, T::default())`: If the conversion failed for any reason.
    ///
    /// # Example
    /// ```
    /// use textnum::Outcome;
    ///
    /// assert_eq!(Outcome::Value(7_i32).flagged(), (true, 7));
    /// assert_eq!(Outcome::<i32>::Malformed.flagged(), (false, 0));
    /// assert_eq!(Outcome::<i32>::Missing.flagged(), (false, 0));
    /// ```
    pub fn flagged(self) -> (bool, T) {
        match self {
            Self::Value(value) => (true, value),
            Self::Malformed | Self::Overflow | Self::Missing => (false, T::default()),
        }
    }
}
