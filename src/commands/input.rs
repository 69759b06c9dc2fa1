//! Line-oriented prompt helper shared by the interactive modes

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line from `input`
///
/// Returns `Ok(None)` at end of input.
pub(crate) fn prompt_line<R: BufRead + ?Sized>(
    input: &mut R,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_then_eof() {
        let mut input = Cursor::new("  a \n\nhello\n");
        assert_eq!(prompt_line(&mut input, "x").unwrap().as_deref(), Some("a"));
        assert_eq!(prompt_line(&mut input, "x").unwrap().as_deref(), Some(""));
        assert_eq!(prompt_line(&mut input, "x").unwrap().as_deref(), Some("hello"));
        assert_eq!(prompt_line(&mut input, "x").unwrap(), None);
    }
}
