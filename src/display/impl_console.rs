use crate::display::interface::{Display, DisplayResult};
use crate::image_classifier::interface::Classification;
use std::io::Write;

pub struct DisplayConsole<W: Write> {
    out: W,
}

impl DisplayConsole<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> DisplayConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_result(result: &Classification) -> String {
    format!("{:.2} | {}", result.confidence, result.label)
}

impl<W: Write> Display for DisplayConsole<W> {
    fn show_results(&mut self, results: &[Classification]) -> DisplayResult {
        writeln!(self.out, "confidence | label")?;
        for result in results {
            writeln!(self.out, "{}", format_result(result))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> DisplayResult {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }
}
