use std::str::FromStr;

/// Selects the source lines that a diagnostic trace is printed for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TracingConfig {
    All,
    Between(usize, usize),
    Before(usize),
    After(usize),
    Only(usize),
    Off,
}

impl FromStr for TracingConfig {
    type Err = String;

    /// Parses a line range: `all`, `off`, `N`, `N..`, `..N` or `N..M`.  Line
    /// numbers start at 1 and ranges are inclusive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "all" => return Ok(TracingConfig::All),
            "off" => return Ok(TracingConfig::Off),
            _ => (),
        }

        let line = |l: &str| -> Result<usize, String> {
            match l.trim().parse::<usize>() {
                Ok(0) => Err("Line numbers start at 1".into()),
                Ok(n) => Ok(n),
                Err(_) => Err(format!("Invalid line number: {}", l)),
            }
        };

        match s.find("..") {
            None => Ok(TracingConfig::Only(line(s)?)),
            Some(idx) => {
                let start = &s[..idx];
                let end = &s[idx + 2..];
                match (start.is_empty(), end.is_empty()) {
                    (true, true) => Ok(TracingConfig::All),
                    (false, true) => Ok(TracingConfig::After(line(start)?)),
                    (true, false) => Ok(TracingConfig::Before(line(end)?)),
                    (false, false) => {
                        let (start, end) = (line(start)?, line(end)?);
                        if start > end {
                            Err(format!("Invalid range: {} is after {}", start, end))
                        } else {
                            Ok(TracingConfig::Between(start, end))
                        }
                    }
                }
            }
        }
    }
}
