//! 단위식/차원식 공용 파서.
//!
//! 문법:
//! ```text
//! expr  := power (('*' | '/') power)*
//! power := atom (('^' | '**') int)?
//! atom  := '(' expr ')' | '[' name ']' | name | '1'
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use super::UnitError;

/// 곱셈/나눗셈/거듭제곱으로 조합 가능한 항. 차원 지수가 범위를 넘으면 `None`.
pub trait Term: Sized {
    fn one() -> Self;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn checked_powi(self, n: i8) -> Option<Self>;
}

/// 파서가 해석기에 넘기는 원자 토큰.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom<'a> {
    /// `[length]` 처럼 대괄호로 감싼 이름
    Bracketed(&'a str),
    /// `knot`, `m`, `Å` 같은 이름
    Name(&'a str),
}

/// 식 전체를 해석한다. 각 원자는 `resolve`로 값을 얻는다.
pub fn parse<T, F>(text: &str, resolve: F) -> Result<T, UnitError>
where
    T: Term,
    F: FnMut(Atom<'_>) -> Result<T, UnitError>,
{
    let mut parser = Parser {
        src: text,
        chars: text.char_indices().peekable(),
        resolve,
    };
    let value = parser.expr()?;
    parser.skip_ws();
    match parser.chars.peek() {
        None => Ok(value),
        Some(&(pos, c)) => Err(parser.error(format!("위치 {pos}의 예상치 못한 문자 '{c}'"))),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '°' | 'µ' | 'Å')
}

struct Parser<'a, F> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    resolve: F,
}

impl<'a, T, F> Parser<'a, F>
where
    T: Term,
    F: FnMut(Atom<'_>) -> Result<T, UnitError>,
{
    fn error(&self, reason: impl Into<String>) -> UnitError {
        UnitError::Syntax {
            input: self.src.to_string(),
            reason: reason.into(),
        }
    }

    fn exponent_overflow(&self) -> UnitError {
        self.error(format!("차원 지수가 범위({}..={})를 벗어남", i8::MIN, i8::MAX))
    }

    fn skip_ws(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn expr(&mut self) -> Result<T, UnitError> {
        let mut value = self.power()?;
        loop {
            self.skip_ws();
            match self.chars.peek().map(|&(_, c)| c) {
                Some('*') => {
                    self.chars.next();
                    let rhs = self.power()?;
                    value = value
                        .checked_mul(rhs)
                        .ok_or_else(|| self.exponent_overflow())?;
                }
                Some('/') => {
                    self.chars.next();
                    let rhs = self.power()?;
                    value = value
                        .checked_div(rhs)
                        .ok_or_else(|| self.exponent_overflow())?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn power(&mut self) -> Result<T, UnitError> {
        let value = self.atom()?;
        self.skip_ws();
        let mut lookahead = self.chars.clone();
        let op_len = match lookahead.next().map(|(_, c)| c) {
            Some('^') => 1,
            Some('*') if lookahead.next().map(|(_, c)| c) == Some('*') => 2,
            _ => 0,
        };
        if op_len == 0 {
            return Ok(value);
        }
        for _ in 0..op_len {
            self.chars.next();
        }
        self.skip_ws();
        let exp = self.integer()?;
        value
            .checked_powi(exp)
            .ok_or_else(|| self.exponent_overflow())
    }

    fn integer(&mut self) -> Result<i8, UnitError> {
        let mut digits = String::new();
        if let Some((_, c)) = self.chars.next_if(|(_, c)| *c == '-' || *c == '+') {
            digits.push(c);
        }
        while let Some((_, c)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
            digits.push(c);
        }
        digits
            .parse::<i8>()
            .map_err(|_| self.error(format!("정수 지수가 아님: '{digits}'")))
    }

    fn atom(&mut self) -> Result<T, UnitError> {
        self.skip_ws();
        let Some(&(start, c)) = self.chars.peek() else {
            return Err(self.error("식이 비어 있음"));
        };
        match c {
            '(' => {
                self.chars.next();
                let value = self.expr()?;
                self.skip_ws();
                match self.chars.next() {
                    Some((_, ')')) => Ok(value),
                    _ => Err(self.error("닫는 괄호가 없음")),
                }
            }
            '[' => {
                self.chars.next();
                let mut end = None;
                for (pos, c) in self.chars.by_ref() {
                    if c == ']' {
                        end = Some(pos);
                        break;
                    }
                }
                let Some(end) = end else {
                    return Err(self.error("닫는 대괄호가 없음"));
                };
                let src = self.src;
                let name = src[start + 1..end].trim();
                (self.resolve)(Atom::Bracketed(name))
            }
            '1' => {
                self.chars.next();
                if self.chars.peek().is_some_and(|&(_, c)| is_name_char(c)) {
                    return Err(self.error("이름은 숫자로 시작할 수 없음"));
                }
                Ok(T::one())
            }
            c if is_name_char(c) && !c.is_ascii_digit() => {
                let mut end = start;
                while let Some((pos, c)) = self.chars.next_if(|(_, c)| is_name_char(*c)) {
                    end = pos + c.len_utf8();
                }
                let src = self.src;
                (self.resolve)(Atom::Name(&src[start..end]))
            }
            c => Err(self.error(format!("위치 {start}의 예상치 못한 문자 '{c}'"))),
        }
    }
}
