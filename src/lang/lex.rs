use super::token::*;
use std::convert::TryFrom;

/// Tokenizes one statement body. Whitespace separates tokens and is
/// otherwise insignificant; the lexer itself never fails, unmatched
/// text becomes `Token::Unknown` and is rejected by the recognizer.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn number(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !pk.is_ascii_digit() {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Token::Number(s)
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !pk.is_ascii_alphabetic() {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        if let Some(word) = Word::from_string(&s) {
            return Token::Word(word);
        }
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Ok(ident) = Ident::try_from(ch) {
                return Token::Ident(ident);
            }
        }
        Token::Unknown(s)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.peek()?.is_ascii_whitespace() {
            self.chars.next();
        }
        let pk = *self.chars.peek()?;
        if pk.is_ascii_digit() {
            return Some(self.number());
        }
        if pk.is_ascii_alphabetic() {
            return Some(self.alphabetic());
        }
        self.chars.next();
        Some(match pk {
            '=' => {
                if self.chars.peek() == Some(&'=') {
                    self.chars.next();
                    Token::EqualEqual
                } else {
                    Token::Equal
                }
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => Token::Unknown(pk.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    fn ident(ch: char) -> Token {
        Token::Ident(Ident::try_from(ch).unwrap())
    }

    #[test]
    fn test_jump_if_zero() {
        assert_eq!(
            lex("if (x == 0) goto 3"),
            vec![
                Token::Word(Word::If),
                Token::LParen,
                ident('x'),
                Token::EqualEqual,
                Token::Number("0".to_string()),
                Token::RParen,
                Token::Word(Word::Goto),
                Token::Number("3".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_insignificant() {
        assert_eq!(lex("x=x+1"), lex("x  =\tx + 1"));
    }

    #[test]
    fn test_abs_is_a_word() {
        assert_eq!(
            lex("abs(a - b)"),
            vec![
                Token::Word(Word::Abs),
                Token::LParen,
                ident('a'),
                Token::Minus,
                ident('b'),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(lex("halt"), vec![Token::Unknown("halt".to_string())]);
        assert_eq!(lex("STOP"), vec![Token::Unknown("STOP".to_string())]);
        assert_eq!(lex("x * 2")[1], Token::Unknown("*".to_string()));
    }
}
