//! Line-based terminal input
//!
//! Forms are asked one field at a time. Blank answers keep the current
//! value when there is one.

use std::io::{self, BufRead, BufReader, Write};

pub struct Prompt {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl Prompt {
    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Prompt on stdin / stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Read one line after printing `label`; `None` at end of input
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a value; end of input counts as a blank answer
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        Ok(self
            .read_line(&format!("{}: ", label))?
            .map(|s| s.trim().to_string())
            .unwrap_or_default())
    }

    /// Ask for a value, keeping `current` on a blank answer
    pub fn ask_or(&mut self, label: &str, current: &str) -> io::Result<String> {
        let answer = if current.is_empty() {
            self.ask(label)?
        } else {
            self.ask(&format!("{} [{}]", label, current))?
        };
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    /// Optional field: blank keeps `current`, "-" clears it
    pub fn ask_optional(&mut self, label: &str, current: Option<&str>) -> io::Result<Option<String>> {
        let answer = self.ask_or(label, current.unwrap_or_default())?;
        Ok(match answer.as_str() {
            "" | "-" => None,
            _ => Some(answer),
        })
    }

    /// Secret input; the terminal still echoes it
    pub fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        Ok(self
            .read_line(&format!("{}: ", label))?
            .unwrap_or_default())
    }

    /// Yes/no question, defaulting to no
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{} (y/N)", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt {
        Prompt::new(Cursor::new(input.to_string()), io::sink())
    }

    #[test]
    fn test_read_line_and_eof() {
        let mut p = prompt("first\r\nsecond\n");
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(p.read_line("> ").unwrap(), None);
        assert_eq!(p.ask("Name").unwrap(), "");
    }

    #[test]
    fn test_ask_or_keeps_current() {
        let mut p = prompt("\n  Basmati  \n");
        assert_eq!(p.ask_or("Name", "Rice").unwrap(), "Rice");
        assert_eq!(p.ask_or("Name", "Rice").unwrap(), "Basmati");
    }

    #[test]
    fn test_ask_optional() {
        let mut p = prompt("\n-\n077 123\n\n");
        assert_eq!(p.ask_optional("Phone", Some("011")).unwrap().as_deref(), Some("011"));
        assert_eq!(p.ask_optional("Phone", Some("011")).unwrap(), None);
        assert_eq!(p.ask_optional("Phone", None).unwrap().as_deref(), Some("077 123"));
        assert_eq!(p.ask_optional("Phone", None).unwrap(), None);
    }

    #[test]
    fn test_secret_keeps_spaces() {
        let mut p = prompt(" pass word \n");
        assert_eq!(p.ask_secret("Password").unwrap(), " pass word ");
    }

    #[test]
    fn test_confirm() {
        let mut p = prompt("y\nYES\nn\n\n");
        assert!(p.confirm("Delete?").unwrap());
        assert!(p.confirm("Delete?").unwrap());
        assert!(!p.confirm("Delete?").unwrap());
        assert!(!p.confirm("Delete?").unwrap());
    }
}
