//! A plain text format for arrays.
//!
//! The first line holds the number of rows and columns. Each following line holds one row,
//! with values separated by tabs:
//!
//! ```text
//! 2 3
//! 1	2	3
//! 4	5	6
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::array::{Array2D, ShapeError};
use crate::text_file::{TextFile, TextFileError};
use crate::value::Element;

pub fn write_array<T>(file: &mut TextFile, array: &Array2D<T>) -> Result<(), ArrayFormatError>
where
    T: Element + Display,
{
    file.write(array.rows())?;
    file.write_str(" ")?;
    file.write(array.cols())?;
    file.newline()?;

    for row in 0..array.rows() {
        for column in 0..array.cols() {
            if column > 0 {
                file.tab()?;
            }
            file.write(array.get(row, column))?;
        }
        file.newline()?;
    }

    Ok(())
}

/// Reads an array written by [`write_array`] into new, unshared storage.
pub fn read_array<T>(file: &mut TextFile) -> Result<Array2D<T>, ArrayFormatError>
where
    T: Element + FromStr,
{
    let rows: usize = file
        .read()
        .map_err(|_| ArrayFormatError::Header("expected row count"))?;
    let cols: usize = file
        .read()
        .map_err(|_| ArrayFormatError::Header("expected column count"))?;

    let len = rows
        .checked_mul(cols)
        .ok_or(ArrayFormatError::Header("array dimensions are too large"))?;

    // Storage grows only as values are read, never from the header alone.
    let mut row_major = Vec::new();
    for _ in 0..len {
        row_major.push(file.read::<T>()?);
    }

    // Values arrive row by row but are stored column by column.
    let values = (0..len)
        .map(|index| row_major[(index % rows) * cols + index / rows])
        .collect();

    Ok(Array2D::from_shape_vec(rows, cols, values)?)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArrayFormatError {
    TextFile(TextFileError),
    Header(&'static str),
    Shape(ShapeError),
}

impl From<TextFileError> for ArrayFormatError {
    fn from(error: TextFileError) -> Self {
        Self::TextFile(error)
    }
}

impl From<ShapeError> for ArrayFormatError {
    fn from(error: ShapeError) -> Self {
        Self::Shape(error)
    }
}

impl Display for ArrayFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextFile(error) => error.fmt(f),
            Self::Header(reason) => write!(f, "invalid header: {reason}"),
            Self::Shape(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for ArrayFormatError {}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::text_file::tests::TempPath;
    use crate::text_file::Mode;

    #[test]
    fn round_trip() {
        let path = TempPath::new("array.txt");
        let a = Array2D::from_shape_vec(2, 3, vec![1.0, 4.0, 2.0, 5.0, 3.0, -6.5]).unwrap();

        {
            let mut file = TextFile::open(&path, Mode::Write).unwrap();
            write_array(&mut file, &a).unwrap();
        }

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2 3\n1\t2\t3\n4\t5\t-6.5\n"
        );

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        let b: Array2D<f64> = read_array(&mut file).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.handle_count(), 1);
    }

    #[test]
    fn bad_header() {
        let path = TempPath::new("header.txt");
        fs::write(&path, "two 3\n").unwrap();

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        assert_eq!(
            read_array::<f64>(&mut file),
            Err(ArrayFormatError::Header("expected row count"))
        );
    }

    #[test]
    fn truncated_values() {
        let path = TempPath::new("short.txt");
        fs::write(&path, "2 2\n1 2\n3\n").unwrap();

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        assert_eq!(
            read_array::<i32>(&mut file),
            Err(ArrayFormatError::TextFile(TextFileError::UnexpectedEof))
        );
    }

    #[test]
    fn oversized_header() {
        let path = TempPath::new("huge.txt");
        fs::write(&path, "3000000000 3000000000\n1\n").unwrap();

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        assert_eq!(
            read_array::<f64>(&mut file),
            Err(ArrayFormatError::TextFile(TextFileError::UnexpectedEof))
        );

        fs::write(&path, format!("{} 2\n", usize::MAX)).unwrap();

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        assert_eq!(
            read_array::<f64>(&mut file),
            Err(ArrayFormatError::Header("array dimensions are too large"))
        );

        fs::write(&path, "0 3000000000\n").unwrap();

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        let a = read_array::<i32>(&mut file).unwrap();
        assert_eq!((a.rows(), a.cols(), a.len()), (0, 3_000_000_000, 0));
    }

    #[test]
    fn empty_array() {
        let path = TempPath::new("empty.txt");
        fs::write(&path, "0 4\n").unwrap();

        let mut file = TextFile::open(&path, Mode::Read).unwrap();
        let a = read_array::<f32>(&mut file).unwrap();
        assert_eq!((a.rows(), a.cols()), (0, 4));
    }
}
