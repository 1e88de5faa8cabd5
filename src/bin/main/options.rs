use std::{env, fmt};

const DEFAULT_WPM: u16 = 250;
const DEFAULT_COLUMNS: u16 = 80;

pub(super) const USAGE: &str = "usage: spritzer [--wpm N] [--columns N] [TEXT...]\n\
controls: <enter> play/pause, + faster, - slower, r restart, q quit";

/// Played when no text is given on the command line.
const SAMPLE_TEXT: &str = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, no ha \
mucho tiempo que vivía un hidalgo de los de lanza en astillero, adarga antigua, rocín flaco y \
galgo corredor. Una olla de algo más vaca que carnero, salpicón las más noches, duelos y \
quebrantos los sábados, lantejas los viernes, algún palomino de añadidura los domingos, \
consumían las tres partes de su hacienda.";

#[derive(Debug, Eq, PartialEq)]
pub(super) enum OptionsError {
    MissingValue(&'static str),
    InvalidNumber(&'static str, String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidNumber(flag, value) => {
                write!(f, "{flag} expects a positive number, got {value:?}")
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub(super) struct Options {
    pub(super) wpm: u16,
    pub(super) columns: u16,
    pub(super) text: String,
}

impl Options {
    pub(super) fn parse<I>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut wpm = DEFAULT_WPM;
        let mut columns = env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|&value| value > 0)
            .unwrap_or(DEFAULT_COLUMNS);
        let mut words = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--wpm" => wpm = positive(&mut args, "--wpm")?,
                "--columns" => columns = positive(&mut args, "--columns")?,
                _ => words.push(arg),
            }
        }

        let text = if words.is_empty() {
            SAMPLE_TEXT.to_string()
        } else {
            words.join(" ")
        };

        Ok(Self {
            wpm,
            columns,
            text,
        })
    }
}

fn positive<I>(args: &mut I, flag: &'static str) -> Result<u16, OptionsError>
where
    I: Iterator<Item = String>,
{
    let value = args.next().ok_or(OptionsError::MissingValue(flag))?;
    match value.parse::<u16>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(OptionsError::InvalidNumber(flag, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn flags_and_text() {
        let options = Options::parse(args(&["--wpm", "400", "--columns", "60", "Hi", "there."]))
            .unwrap();
        assert_eq!(options.wpm, 400);
        assert_eq!(options.columns, 60);
        assert_eq!(options.text, "Hi there.");
    }

    #[test]
    fn sample_text_when_none_given() {
        let options = Options::parse(args(&["--wpm", "300"])).unwrap();
        assert_eq!(options.text, SAMPLE_TEXT);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            Options::parse(args(&["--wpm", "0"])),
            Err(OptionsError::InvalidNumber("--wpm", "0".to_string()))
        );
        assert_eq!(
            Options::parse(args(&["--columns"])),
            Err(OptionsError::MissingValue("--columns"))
        );
    }
}
