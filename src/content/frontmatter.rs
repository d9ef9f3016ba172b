//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::error::{ContentError, Result};

/// Header delimiter line
const DELIMITER: &str = "---";

/// Custom deserializer that accepts any scalar and keeps it as a string
///
/// `date: 2024` or `title: 42` in YAML arrive as numbers; they are stringified
/// rather than rejected. Null becomes `None`.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarString)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Header language, picked by the tag on the opening delimiter (`---json`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Yaml,
    Json,
}

impl Language {
    fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "" | "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(ContentError::front_matter(
                "unknown",
                format!("unsupported front-matter language {other:?}"),
            )),
        }
    }
}

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,

    /// Every other declared field, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body) with the body trimmed
    ///
    /// An unclosed header runs to the end of the file and leaves an empty body.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        // The opening delimiter must be the very first line
        let content = content.trim_start_matches('\u{feff}');

        let Some(after_open) = content.strip_prefix(DELIMITER) else {
            return Ok((FrontMatter::default(), content.trim()));
        };

        // The opening line is "---" with an optional language tag; a lone
        // "---" with nothing after it, or a longer rule like "----", is body.
        let Some(newline) = after_open.find('\n') else {
            return Ok((FrontMatter::default(), content.trim()));
        };
        let tag = after_open[..newline].trim();
        if !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok((FrontMatter::default(), content.trim()));
        }
        let language = Language::from_tag(tag)?;
        let rest = &after_open[newline + 1..];

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIMITER {
                let header = &rest[..offset];
                let body = &rest[offset + line.len()..];
                let fm = Self::parse_header(header, language)?;
                return Ok((fm, body.trim()));
            }
            offset += line.len();
        }

        // No closing delimiter, the rest of the file is header
        let fm = Self::parse_header(rest, language)?;
        Ok((fm, ""))
    }

    fn parse_header(header: &str, language: Language) -> Result<Self> {
        match language {
            Language::Yaml => {
                let blank = header.lines().all(|line| {
                    let trimmed = line.trim();
                    trimmed.is_empty() || trimmed.starts_with('#')
                });
                if blank {
                    return Ok(FrontMatter::default());
                }
                serde_yaml::from_str(header).map_err(|e| ContentError::front_matter("YAML", e))
            }
            Language::Json => {
                if header.trim().is_empty() {
                    return Ok(FrontMatter::default());
                }
                serde_json::from_str(header).map_err(|e| ContentError::front_matter("JSON", e))
            }
        }
    }
}
