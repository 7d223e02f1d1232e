use crate::cli::{output, run_view};
use log::error;
use o365endpoints::{EndpointSource, Error, Result, View};
use std::io::{BufRead, Write};

/*-------------------------------------------------------------------------------------------------
  Interactive Shell
-------------------------------------------------------------------------------------------------*/

/// Numbered-menu loop: print the menu, read one selection, print the selected view, repeat
/// until the input ends. A failed operation or an invalid selection returns to the menu.
pub struct Shell<'s, R, W> {
    source: &'s dyn EndpointSource,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(source: &'s dyn EndpointSource, input: R, output: W) -> Self {
        Self {
            source,
            input,
            output,
        }
    }

    /// Run until end of input. Only terminal I/O errors end the loop early.
    pub fn run(&mut self) -> Result<()> {
        let menu = output::menu_table(false);

        loop {
            writeln!(self.output, "{}", output::INTRO)?;
            writeln!(self.output, "{menu}")?;
            write!(self.output, "\nEnter a number> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            let view = match parse_selection(&line) {
                Ok(view) => view,
                Err(error) => {
                    writeln!(self.output, "\n{error}")?;
                    continue;
                }
            };

            match run_view(self.source, view) {
                Ok(text) => writeln!(self.output, "{text}")?,
                Err(error) => {
                    error!("{}: {}", view.title(), error);
                    writeln!(self.output, "\nError: {error}")?;
                }
            }
        }
    }
}

/*--------------------------------------------------------------------------------------
  Parse Menu Selection
--------------------------------------------------------------------------------------*/

pub fn parse_selection(line: &str) -> Result<View> {
    let number: usize = line.trim().parse().map_err(|_| {
        Error::Selection("Not a valid selection; enter a valid number.".to_string())
    })?;

    View::from_number(number).ok_or_else(|| Error::Selection("Not a valid selection!".to_string()))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use o365endpoints::{Endpoints, PrefixType, ServiceArea};
    use std::cell::Cell;
    use std::io::Cursor;

    const TEST_ENDPOINTS_JSON: &str = include_str!("../../tests/data/endpoints.json");

    /*----------------------------------------------------------------------------------
      Test Sources
    ----------------------------------------------------------------------------------*/

    /// Serves the test directory and counts how often it was asked for it.
    struct StaticSource {
        fetches: Cell<usize>,
    }

    impl EndpointSource for StaticSource {
        fn endpoints(&self) -> Result<Endpoints> {
            self.fetches.set(self.fetches.get() + 1);
            Endpoints::from_json(TEST_ENDPOINTS_JSON)
        }
    }

    struct FailingSource;

    impl EndpointSource for FailingSource {
        fn endpoints(&self) -> Result<Endpoints> {
            Err(Error::Io(std::io::Error::other("connection reset")))
        }
    }

    fn run_shell(source: &dyn EndpointSource, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(source, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    /*----------------------------------------------------------------------------------
      Selection Parsing
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n").unwrap(), View::ServiceAreas);
        assert_eq!(
            parse_selection(" 7 ").unwrap(),
            View::Prefixes(ServiceArea::Exchange, PrefixType::IPv4)
        );

        let non_numeric = parse_selection("exchange-ipv4").unwrap_err();
        assert_eq!(
            non_numeric.to_string(),
            "Not a valid selection; enter a valid number."
        );

        let out_of_range = parse_selection("13").unwrap_err();
        assert_eq!(out_of_range.to_string(), "Not a valid selection!");
        assert!(parse_selection("0").is_err());
        assert!(parse_selection("-1").is_err());
    }

    /*----------------------------------------------------------------------------------
      Shell Loop
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_shell_prints_selected_view() {
        let source = StaticSource {
            fetches: Cell::new(0),
        };
        let output = run_shell(&source, "7\n");

        assert!(output.contains("Welcome to O365 endpoints."));
        assert!(output.contains("\"exchangeOnlineIPv4\": ["));
        assert!(output.contains("\"13.107.6.152/31\""));
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn test_shell_refetches_for_every_selection() {
        let source = StaticSource {
            fetches: Cell::new(0),
        };
        let output = run_shell(&source, "1\n3\n12\n");

        assert!(output.contains("\"serviceAreaInfo\""));
        assert!(output.contains("\"expressRoutesExceptions\""));
        assert!(output.contains("\"skypeForBusinessOnlineAndMicrosoftTeamsIPv6\""));
        assert_eq!(source.fetches.get(), 3);
    }

    #[test]
    fn test_shell_recovers_from_invalid_input() {
        let source = StaticSource {
            fetches: Cell::new(0),
        };
        let output = run_shell(&source, "abc\n42\n4\n");

        assert!(output.contains("Not a valid selection; enter a valid number."));
        assert!(output.contains("Not a valid selection!"));
        assert!(output.contains("\"allItemsWithIPs\""));
        assert_eq!(output.matches("Enter a number> ").count(), 4);
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn test_shell_recovers_from_fetch_failure() {
        let output = run_shell(&FailingSource, "2\n");

        assert!(output.contains("Error: connection reset"));
        assert_eq!(output.matches("Enter a number> ").count(), 2); // Back to the menu
    }

    #[test]
    fn test_shell_ends_on_end_of_input() {
        let output = run_shell(&FailingSource, "");
        assert_eq!(output.matches("Enter a number> ").count(), 1);
    }
}
