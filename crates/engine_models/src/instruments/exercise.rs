//! Option exercise style definitions.

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime. Only the
/// binomial lattice pricer distinguishes the two; the closed-form and Monte
/// Carlo engines always value the European exercise.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any time before expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns whether this style permits exercise before expiry.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}
