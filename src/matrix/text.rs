use itertools::Itertools;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::{MatrixError, ReadError};
use crate::field::field::{FieldDisplay, FieldElement, FieldKind};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dyn::MatrixDyn;
use crate::matrix::matrix_gen::MatrixGen;

// [[e00 e01]
//  [e10 e11]]
impl<T: FieldElement> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .cells()
            .chunks(self.cols())
            .map(|row| format!("[{}]", row.iter().map(|x| FieldDisplay(*x)).join(" ")))
            .join("\n ");
        write!(f, "[{}]", body)
    }
}

impl fmt::Display for MatrixDyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixDyn::Integer(m) => fmt::Display::fmt(m, f),
            MatrixDyn::Float32(m) => fmt::Display::fmt(m, f),
        }
    }
}

fn print_named<W: Write>(
    body: &dyn fmt::Display,
    name: Option<&str>,
    output: &mut W,
) -> io::Result<()> {
    if let Some(name) = name {
        write!(output, "{} = ", name)?;
    }
    writeln!(output, "{}", body)
}

// Pulls whitespace separated tokens off the reader one at a time, consuming
// nothing past the end of the last token returned.
struct Tokens<R> {
    input: R,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens { input }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut token = Vec::new();
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
                used += 1;
            }
            self.input.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }

    fn dimension(&mut self) -> Result<usize, ReadError> {
        Ok(self
            .next_token()?
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or(MatrixError::InvalidSize)?)
    }
}

impl<T: FieldElement> MatrixGen<T> {
    pub fn print<W: Write>(&self, name: Option<&str>, output: &mut W) -> io::Result<()> {
        print_named(self, name, output)
    }

    /// Reads `rows cols` followed by the elements in row-major order.
    ///
    /// Only the tokens of one matrix are consumed, so several matrices can be
    /// read in a row from the same input.
    pub fn read<R: BufRead>(input: R) -> Result<MatrixGen<T>, ReadError> {
        let mut tokens = Tokens::new(input);
        let rows = tokens.dimension()?;
        let cols = tokens.dimension()?;

        let mut m = MatrixGen::<T>::new(rows, cols)?;
        for (position, cell) in m.cells_mut().iter_mut().enumerate() {
            let token = tokens.next_token()?.unwrap_or_default();
            *cell = T::parse(&token).ok_or_else(|| ReadError::InvalidElement {
                field: T::info().name,
                position,
                token,
            })?;
        }
        Ok(m)
    }
}

impl MatrixDyn {
    pub fn print<W: Write>(&self, name: Option<&str>, output: &mut W) -> io::Result<()> {
        print_named(self, name, output)
    }

    pub fn read<R: BufRead>(input: R, kind: FieldKind) -> Result<MatrixDyn, ReadError> {
        Ok(match kind {
            FieldKind::Integer => MatrixGen::<i64>::read(input)?.into(),
            FieldKind::Float32 => MatrixGen::<f32>::read(input)?.into(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
