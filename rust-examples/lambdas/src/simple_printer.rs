//! Printing each element of a list with a closure.

use std::io::Write;

use fp_common::error::Result;
use fp_common::sequence::for_each;

/// Names printed by the `simple_printer` binary.
pub const DEFAULT_NAMES: [&str; 3] = ["Raj", "Vicky", "Aman"];

/// Formats one output line.
pub fn name_line(name: &str) -> String {
    format!("Name: {name}")
}

/// Writes `Name: <name>` for every name, in order.
///
/// The first write error stops the remaining output and is returned.
///
/// # Example
/// ```
/// use lambdas::print_names;
///
/// let mut out = Vec::new();
/// print_names(&mut out, &["Raj", "Aman"]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Name: Raj\nName: Aman\n");
/// ```
pub fn print_names<W: Write>(out: &mut W, names: &[&str]) -> Result<()> {
    let mut written = Ok(());
    for_each(names, |name| {
        if written.is_ok() {
            written = writeln!(out, "{}", name_line(name));
        }
    });
    written?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailAfter {
        lines_left: usize,
        buf: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.lines_left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            if data.contains(&b'\n') {
                self.lines_left -= 1;
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_default_names() {
        let mut out = Vec::new();
        print_names(&mut out, &DEFAULT_NAMES).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec!["Name: Raj", "Name: Vicky", "Name: Aman"]
        );
    }

    #[test]
    fn test_print_no_names() {
        let mut out = Vec::new();
        print_names(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_error_stops_output() {
        let mut out = FailAfter { lines_left: 1, buf: Vec::new() };
        let result = print_names(&mut out, &DEFAULT_NAMES);
        assert!(matches!(result, Err(fp_common::DemoError::Output(_))));
        assert_eq!(String::from_utf8(out.buf).unwrap(), "Name: Raj\n");
    }
}
