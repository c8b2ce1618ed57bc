use super::LineNumber;

pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    UndefinedLine = 8,
    TypeMismatch = 13,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            6 => "OVERFLOW",
            8 => "UNDEFINED LINE",
            13 => "TYPE MISMATCH",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
