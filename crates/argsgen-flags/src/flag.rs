//! A single `identifier=literal` build flag.

use serde::Serialize;

use crate::FlagError;

/// Literal on the right-hand side of a flag line.
///
/// Integers are stored numerically, so leading zeros are not kept:
/// `x=007` displays as `x=7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(u64),
    /// Contents of a double-quoted string, without the quotes.
    Str(String),
}

impl FlagValue {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "true" => return Some(FlagValue::Bool(true)),
            "false" => return Some(FlagValue::Bool(false)),
            _ => {}
        }

        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw.parse().ok().map(FlagValue::Int);
        }

        let inner = raw.strip_prefix('"')?.strip_suffix('"')?;
        if inner.contains('"') {
            return None;
        }
        Some(FlagValue::Str(inner.to_string()))
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(n) => write!(f, "{}", n),
            FlagValue::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Flag {
    pub name: String,
    pub value: FlagValue,
}

impl Flag {
    /// Parse one `identifier=literal` line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, FlagError> {
        let (name, raw) = line
            .trim()
            .split_once('=')
            .ok_or(FlagError::MissingEquals { line: 0 })?;

        if !is_identifier(name) {
            return Err(FlagError::InvalidName {
                line: 0,
                name: name.to_string(),
            });
        }

        let value = FlagValue::parse(raw).ok_or_else(|| FlagError::InvalidValue {
            line: 0,
            name: name.to_string(),
            value: raw.to_string(),
        })?;

        Ok(Flag {
            name: name.to_string(),
            value,
        })
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_literal_form() {
        assert_eq!(
            Flag::parse("is_debug=false").unwrap().value,
            FlagValue::Bool(false)
        );
        assert_eq!(
            Flag::parse("concurrent_links=2").unwrap().value,
            FlagValue::Int(2)
        );
        assert_eq!(
            Flag::parse(r#"target_cpu="x64""#).unwrap().value,
            FlagValue::Str("x64".into())
        );
        assert_eq!(
            Flag::parse(r#"google_api_key="""#).unwrap().value,
            FlagValue::Str(String::new())
        );
    }

    #[test]
    fn display_restores_the_line() {
        for line in [
            "use_lld=true",
            "safe_browsing_mode=1",
            r#"ffmpeg_branding="Chrome""#,
            r#"google_default_client_id="""#,
        ] {
            assert_eq!(Flag::parse(line).unwrap().to_string(), line);
        }
    }

    #[test]
    fn leading_zeros_are_normalised() {
        let flag = Flag::parse("x=007").unwrap();
        assert_eq!(flag.value, FlagValue::Int(7));
        assert_eq!(flag.to_string(), "x=7");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            Flag::parse("enable_nacl"),
            Err(FlagError::MissingEquals { line: 0 })
        );
        assert!(matches!(
            Flag::parse("9lives=true"),
            Err(FlagError::InvalidName { .. })
        ));
        assert!(matches!(
            Flag::parse("=true"),
            Err(FlagError::InvalidName { .. })
        ));
        assert!(matches!(
            Flag::parse("is_debug=maybe"),
            Err(FlagError::InvalidValue { .. })
        ));
        assert!(matches!(
            Flag::parse("concurrent_links=-2"),
            Err(FlagError::InvalidValue { .. })
        ));
        assert!(matches!(
            Flag::parse(r#"target_os="win"#),
            Err(FlagError::InvalidValue { .. })
        ));
    }
}
