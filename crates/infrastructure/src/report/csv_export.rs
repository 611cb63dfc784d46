use super::{field_text, ReportEntry};
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes a header row of `fields` followed by one row per entry. Quoting is
/// minimal and rows end in CRLF.
pub fn write_csv<W: Write>(
    writer: &mut W,
    fields: &[String],
    entries: &[ReportEntry],
) -> io::Result<()> {
    write_row(writer, fields.iter().map(|f| f.as_str().into()))?;
    for entry in entries {
        write_row(
            writer,
            fields.iter().map(|f| Cow::Owned(field_text(entry, f))),
        )?;
    }
    writer.flush()
}

fn write_row<'a, W: Write>(
    writer: &mut W,
    cells: impl Iterator<Item = Cow<'a, str>>,
) -> io::Result<()> {
    let row: Vec<String> = cells.map(|cell| quote(&cell).into_owned()).collect();
    write!(writer, "{}\r\n", row.join(","))
}

fn quote(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_only_when_needed() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
