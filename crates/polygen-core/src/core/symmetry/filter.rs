use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ALLOWED_VALUES: &str = "'all', 'partly-inter', or 'purely-inter'";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error(
        "accepted_terms '{requested}' requires inter-fragment terms, but the composition has {fragment_count} fragment; use 'all'"
    )]
    FragmentCountMismatch {
        fragment_count: usize,
        requested: String,
    },

    #[error("Invalid accepted_terms value '{value}'. Expected one of {allowed}.", allowed = ALLOWED_VALUES)]
    InvalidValue { value: String },
}

/// Which polynomial terms the generator keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPolicy {
    /// Keep every term.
    All,
    /// Drop any term with an intra-fragment variable of degree 1 or more.
    PurelyInter,
    /// Drop terms with degree 0 across every variable.
    PartlyInter,
}

impl FilterPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::PurelyInter => "purely-inter",
            Self::PartlyInter => "partly-inter",
        }
    }

    /// The policy used when none is configured: `all` for a monomer, `purely-inter` otherwise.
    pub fn default_for(fragment_count: usize) -> Self {
        if fragment_count == 1 {
            Self::All
        } else {
            Self::PurelyInter
        }
    }

    /// Resolves the configured `accepted_terms` value against the fragment count.
    ///
    /// A single fragment has no inter-fragment terms, so anything other than `all` is rejected
    /// there before the value itself is checked.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::FragmentCountMismatch`] for a non-`all` value on a monomer, and
    /// [`FilterError::InvalidValue`] for an unrecognized value.
    pub fn resolve(requested: Option<&str>, fragment_count: usize) -> Result<Self, FilterError> {
        let Some(value) = requested else {
            return Ok(Self::default_for(fragment_count));
        };

        if fragment_count == 1 && value != Self::All.as_str() {
            return Err(FilterError::FragmentCountMismatch {
                fragment_count,
                requested: value.to_string(),
            });
        }

        value.parse()
    }
}

impl FromStr for FilterPolicy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "purely-inter" => Ok(Self::PurelyInter),
            "partly-inter" => Ok(Self::PartlyInter),
            _ => Err(FilterError::InvalidValue {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
