use std::io::{Read, Write};

use ini::{Ini, ParseOption, Properties};

use crate::error::{AppError, AppResult};

use super::comments::Comments;
use super::model::CloudCliEntry;

pub const ACCESS_KEY_ID_KEY: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY_KEY: &str = "aws_secret_access_key";
pub const SESSION_TOKEN_KEY: &str = "aws_session_token";

/// An INI credentials document: ordered sections of ordered key/value pairs.
///
/// Values are kept verbatim: no quote stripping and no escape processing, so
/// sections a write does not touch are serialized back as they were read.
#[derive(Debug, Clone)]
pub struct CredentialDocument {
    ini: Ini,
    comments: Comments,
}

impl Default for CredentialDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialDocument {
    pub fn new() -> Self {
        Self {
            ini: Ini::new(),
            comments: Comments::default(),
        }
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        let ini = Ini::load_from_str_opt(raw, verbatim())?;
        Ok(Self {
            ini,
            comments: Comments::scan(raw),
        })
    }

    pub fn read_from<R: Read>(reader: &mut R) -> AppResult<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::parse(&raw)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> AppResult<()> {
        let mut first = true;
        for (section, props) in self.ini.iter() {
            if let Some(name) = section {
                if !first {
                    writeln!(writer)?;
                }
                for line in self.comments.before_section(name) {
                    writeln!(writer, "{line}")?;
                }
                writeln!(writer, "[{name}]")?;
            } else if props.is_empty() {
                continue;
            }
            first = false;

            for (key, value) in props.iter() {
                for line in self.comments.before_key(section, key) {
                    writeln!(writer, "{line}")?;
                }
                writeln!(writer, "{key}={value}")?;
            }
        }

        for line in self.comments.trailing() {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    pub fn to_ini_string(&self) -> AppResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|err| AppError::Document(format!("serialized document is not utf-8: {err}")))
    }

    /// Writes the three credential keys of `entry` into its profile section,
    /// creating the section at the end of the document when it is missing.
    ///
    /// Nothing is mutated when the entry is rejected.
    pub fn save_entry(&mut self, entry: &CloudCliEntry) -> AppResult<()> {
        validate_section_name(&entry.profile_name)?;
        for (key, value) in entry_pairs(entry) {
            validate_value(key, value)?;
        }

        let mut section = self.ini.with_section(Some(entry.profile_name.as_str()));
        for (key, value) in entry_pairs(entry) {
            section.set(key, value);
        }

        tracing::debug!(profile = %entry.profile_name, "credential entry saved");
        Ok(())
    }

    pub fn section(&self, name: &str) -> Option<CredentialSection<'_>> {
        self.ini
            .section(Some(name))
            .map(|props| CredentialSection { props })
    }

    pub fn has_profile(&self, name: &str) -> bool {
        self.ini.section(Some(name)).is_some()
    }

    /// Named sections in document order.
    pub fn profile_names(&self) -> Vec<String> {
        self.ini
            .sections()
            .flatten()
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Reads a profile back as an entry. Missing keys come back empty.
    pub fn entry(&self, name: &str) -> Option<CloudCliEntry> {
        let section = self.section(name)?;
        let field = |key: &str| section.get(key).unwrap_or_default().to_string();

        Some(CloudCliEntry {
            profile_name: name.to_string(),
            key_id: field(ACCESS_KEY_ID_KEY),
            key: field(SECRET_ACCESS_KEY_KEY),
            token: field(SESSION_TOKEN_KEY),
        })
    }

    pub fn remove_profile(&mut self, name: &str) -> bool {
        self.ini.delete(Some(name)).is_some()
    }
}

/// Read-only view of one section.
#[derive(Debug, Clone, Copy)]
pub struct CredentialSection<'a> {
    props: &'a Properties,
}

impl<'a> CredentialSection<'a> {
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.props.get(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&'a str> {
        self.props.iter().map(|(key, _)| key).collect()
    }
}

fn entry_pairs(entry: &CloudCliEntry) -> [(&'static str, &str); 3] {
    [
        (ACCESS_KEY_ID_KEY, entry.key_id.as_str()),
        (SECRET_ACCESS_KEY_KEY, entry.key.as_str()),
        (SESSION_TOKEN_KEY, entry.token.as_str()),
    ]
}

fn validate_section_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Document("profile name is empty".to_string()));
    }

    if name.trim() != name || name.contains(['[', ']', '\n', '\r']) {
        return Err(AppError::Document(format!(
            "profile name `{}` cannot be used as a section header",
            name.escape_debug()
        )));
    }

    Ok(())
}

fn validate_value(key: &str, value: &str) -> AppResult<()> {
    if value.contains(['\n', '\r']) {
        return Err(AppError::Document(format!(
            "value for {key} spans multiple lines"
        )));
    }

    // The parser trims around values.
    if value.trim() != value {
        return Err(AppError::Document(format!(
            "value for {key} has leading or trailing whitespace"
        )));
    }

    Ok(())
}

fn verbatim() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}
