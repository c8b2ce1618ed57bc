use super::Error;
use crate::error;
use std::convert::TryFrom;

/// A variable name: one ASCII letter, case-sensitive, so `x` and `X`
/// are distinct variables.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Ident(char);

impl TryFrom<char> for Ident {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            Ok(Ident(ch))
        } else {
            Err(error!(SyntaxError; "INVALID VARIABLE NAME"))
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_letters_only() {
        assert!(Ident::try_from('x').is_ok());
        assert!(Ident::try_from('Q').is_ok());
        assert!(Ident::try_from('3').is_err());
        assert!(Ident::try_from('_').is_err());
        assert!(Ident::try_from('é').is_err());
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Ident::try_from('x').unwrap(), Ident::try_from('X').unwrap());
    }
}
