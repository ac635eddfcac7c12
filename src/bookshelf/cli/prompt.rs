use bookshelf::error::{LibraryError, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

const BLANK_ERROR: &str = "Error: This field cannot be blank. Please try again.";
const YEAR_ERROR: &str = "Error: Publication year must be a valid number. Please try again.";
const YES_NO_ERROR: &str = "Error: Please answer yes or no.";

/// Line-oriented prompts over any reader/writer pair.
///
/// Required prompts loop until the answer is valid. A closed input stream is an
/// error rather than an endless loop.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Raw trimmed answer, possibly empty.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            // Keep the next output on its own line.
            writeln!(self.output)?;
            return Err(LibraryError::Api("Input closed while waiting for an answer".into()));
        }
        Ok(buf.trim().to_string())
    }

    pub fn required(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(BLANK_ERROR)?;
        }
    }

    pub fn year(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let answer = self.line(prompt)?;
            match parse_year(&answer) {
                Some(year) => return Ok(year),
                None => self.say(YEAR_ERROR)?,
            }
        }
    }

    /// Blank keeps the current value (`None`).
    pub fn optional(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.line(prompt)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    /// Blank keeps the current value; anything else must be a valid year.
    pub fn optional_year(&mut self, prompt: &str) -> Result<Option<u32>> {
        loop {
            let answer = self.line(prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse_year(&answer) {
                Some(year) => return Ok(Some(year)),
                None => self.say(YEAR_ERROR)?,
            }
        }
    }

    /// Only an explicit yes counts; a closed input means no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match self.line(prompt) {
            Ok(answer) => Ok(parse_yes_no(&answer) == Some(true)),
            Err(LibraryError::Api(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Blank keeps the current value; otherwise yes or no.
    pub fn optional_confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let answer = self.line(prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse_yes_no(&answer) {
                Some(b) => return Ok(Some(b)),
                None => self.say(YES_NO_ERROR)?,
            }
        }
    }
}

fn parse_year(s: &str) -> Option<u32> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|y| *y > 0)
}

fn parse_yes_no(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn required_reprompts_on_blank() {
        let mut p = prompter("\n   \nDune\n");
        assert_eq!(p.required("Title: ").unwrap(), "Dune");
        assert_eq!(output(&p).matches(BLANK_ERROR).count(), 2);
    }

    #[test]
    fn year_rejects_non_numeric_and_zero() {
        let mut p = prompter("nineteen\n-3\n0\n1965\n");
        assert_eq!(p.year("Year: ").unwrap(), 1965);
        assert_eq!(output(&p).matches(YEAR_ERROR).count(), 3);
    }

    #[test]
    fn optional_blank_is_none() {
        let mut p = prompter("\nEmma\n");
        assert_eq!(p.optional("Title: ").unwrap(), None);
        assert_eq!(p.optional("Title: ").unwrap(), Some("Emma".into()));
    }

    #[test]
    fn optional_year_keeps_on_blank_and_retries_on_garbage() {
        let mut p = prompter("\nabc\n1815\n");
        assert_eq!(p.optional_year("Year: ").unwrap(), None);
        assert_eq!(p.optional_year("Year: ").unwrap(), Some(1815));
    }

    #[test]
    fn confirm_only_accepts_yes() {
        let mut p = prompter("YES\nmaybe\n");
        assert!(p.confirm("Read? ").unwrap());
        assert!(!p.confirm("Read? ").unwrap());
        // Closed input
        assert!(!p.confirm("Read? ").unwrap());
    }

    #[test]
    fn optional_confirm_tristate() {
        let mut p = prompter("\nn\nwhat\ny\n");
        assert_eq!(p.optional_confirm("Read? ").unwrap(), None);
        assert_eq!(p.optional_confirm("Read? ").unwrap(), Some(false));
        assert_eq!(p.optional_confirm("Read? ").unwrap(), Some(true));
        assert!(output(&p).contains(YES_NO_ERROR));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(matches!(p.required("Title: "), Err(LibraryError::Api(_))));
    }
}
