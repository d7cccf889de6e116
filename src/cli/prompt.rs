use crate::engines::search::SearchMethod;
use crate::error::{FeatselectError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Where the search gets its features from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    /// Feature count only; subsets are scored randomly
    FeatureCount(usize),
}

impl DataSource {
    /// A bare integer is a feature count, anything else a path
    pub fn from_answer(answer: &str) -> Self {
        let answer = answer.trim();
        match answer.parse::<usize>() {
            Ok(n) => Self::FeatureCount(n),
            Err(_) => Self::File(PathBuf::from(answer)),
        }
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(FeatselectError::Validation(
            "Unexpected end of input".to_string(),
        ));
    }
    Ok(line.trim().to_string())
}

pub fn prompt_data_source<R: BufRead, W: Write + ?Sized>(input: &mut R, out: &mut W) -> Result<DataSource> {
    write!(
        out,
        "Please enter the name of the dataset file, or a total number of features: "
    )?;
    out.flush()?;
    let answer = read_answer(input)?;
    if answer.is_empty() {
        return Err(FeatselectError::DataLoading(
            "No dataset file given".to_string(),
        ));
    }
    Ok(DataSource::from_answer(&answer))
}

/// `Ok(None)` means the answer was not a valid menu choice
pub fn prompt_method<R: BufRead, W: Write + ?Sized>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<SearchMethod>> {
    writeln!(out, "Type the number of the algorithm you want to run.\n")?;
    writeln!(out, "1) {}", SearchMethod::Forward.title())?;
    writeln!(out, "2) {}", SearchMethod::Backward.title())?;
    out.flush()?;

    let answer = read_answer(input)?;
    Ok(SearchMethod::from_selector(&answer).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_data_source_answers() {
        assert_eq!(DataSource::from_answer(" 10 \n"), DataSource::FeatureCount(10));
        assert_eq!(
            DataSource::from_answer("small-test-dataset.txt"),
            DataSource::File(PathBuf::from("small-test-dataset.txt"))
        );
    }

    #[test]
    fn test_prompt_method_menu() {
        let mut out: Vec<u8> = Vec::new();
        let choice = prompt_method(&mut Cursor::new("2\n"), &mut out).unwrap();
        assert_eq!(choice, Some(SearchMethod::Backward));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1) Forward Selection"));
        assert!(text.contains("2) Backward Elimination"));
    }

    #[test]
    fn test_prompt_method_invalid_choice() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(prompt_method(&mut Cursor::new("7\n"), &mut out).unwrap(), None);
    }

    #[test]
    fn test_prompt_eof() {
        let mut out: Vec<u8> = Vec::new();
        assert!(prompt_data_source(&mut Cursor::new(""), &mut out).is_err());
    }
}
