use std::collections::HashMap;
use std::mem;

/// Comment lines of a parsed document, attached to the header or key line
/// that follows them so they can be written back in place.
#[derive(Debug, Clone, Default)]
pub(crate) struct Comments {
    sections: HashMap<String, Vec<String>>,
    keys: HashMap<(Option<String>, String), Vec<String>>,
    trailing: Vec<String>,
}

impl Comments {
    pub(crate) fn scan(raw: &str) -> Self {
        let mut comments = Self::default();
        let mut section: Option<String> = None;
        let mut pending = Vec::new();

        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.starts_with(['#', ';']) {
                pending.push(trimmed.to_string());
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                let name = rest.split(']').next().unwrap_or_default().trim().to_string();
                if !pending.is_empty() {
                    comments
                        .sections
                        .entry(name.clone())
                        .or_insert_with(|| mem::take(&mut pending));
                    pending.clear();
                }
                section = Some(name);
                continue;
            }

            let key = trimmed
                .split(['=', ':'])
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            if !pending.is_empty() {
                comments
                    .keys
                    .entry((section.clone(), key))
                    .or_insert_with(|| mem::take(&mut pending));
                pending.clear();
            }
        }

        comments.trailing = pending;
        comments
    }

    pub(crate) fn before_section(&self, name: &str) -> &[String] {
        self.sections.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn before_key(&self, section: Option<&str>, key: &str) -> &[String] {
        self.keys
            .get(&(section.map(ToOwned::to_owned), key.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn trailing(&self) -> &[String] {
        &self.trailing
    }
}
