use std::{fmt, num::ParseIntError, str::FromStr};

const DEFAULT_PIN_CODE_LENGTH: usize = 8;

/// Number of characters a pairing PIN must have before it is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinLength(usize);

#[derive(Debug, PartialEq)]
pub enum PinLengthError {
    Zero,
    NotANumber(ParseIntError),
}

impl PinLength {
    pub fn new(length: usize) -> Result<Self, PinLengthError> {
        match length {
            0 => Err(PinLengthError::Zero),
            length => Ok(Self(length)),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Length is counted in UTF-16 code units, as the browser's `maxlength` does.
    pub fn matches(&self, pin: &str) -> bool {
        pin.encode_utf16().count() == self.0
    }
}

impl Default for PinLength {
    fn default() -> Self {
        Self(DEFAULT_PIN_CODE_LENGTH)
    }
}

impl FromStr for PinLength {
    type Err = PinLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.trim().parse().map_err(PinLengthError::NotANumber)?;
        Self::new(length)
    }
}

impl fmt::Display for PinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PinLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinLengthError::Zero => write!(f, "PIN code length cannot be zero"),
            PinLengthError::NotANumber(err) => write!(f, "Invalid PIN code length: {}", err),
        }
    }
}

impl std::error::Error for PinLengthError {}
