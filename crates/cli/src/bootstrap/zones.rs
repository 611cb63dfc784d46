use ferrous_audit_domain::DomainError;
use std::io::{self, BufRead};

/// Zone file paths from the command line, or one per line from stdin.
pub fn zone_sources(positional: &[String], read_stdin: bool) -> anyhow::Result<Vec<String>> {
    let sources = if read_stdin {
        read_lines(io::stdin().lock())?
    } else {
        positional.to_vec()
    };

    if sources.is_empty() {
        return Err(DomainError::NoZoneInput.into());
    }
    Ok(sources)
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut sources = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sources.push(trimmed.to_string());
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_skips_blanks() {
        let input = "zones/example.com\n\n  zones/example.net  \n";
        let sources = read_lines(input.as_bytes()).unwrap();
        assert_eq!(sources, vec!["zones/example.com", "zones/example.net"]);
    }

    #[test]
    fn test_no_positional_zones_is_fatal() {
        let err = zone_sources(&[], false).unwrap_err();
        assert!(err.to_string().contains("No zones"));
    }

    #[test]
    fn test_positional_zones_kept_in_order() {
        let zones = vec!["b.example".to_string(), "a.example".to_string()];
        assert_eq!(zone_sources(&zones, false).unwrap(), zones);
    }
}
