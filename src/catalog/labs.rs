use std::collections::HashMap;

use crate::io::csv_rows::RawRow;

/// What we know about a lab: the display name and the slug that external
/// links want (which is not always the slug the prices csv uses).
#[derive(Debug, Clone)]
pub struct LabInfo {
    pub full_name: String,
    pub canonical_slug: String,
}

/// Lab slug -> lab info, keyed by the lowercased slug.
///
/// This is display-only data. A missing entry is never an error; every
/// lookup falls back to the raw slug it was asked about. That also covers
/// the case where the labs csv failed to load and the directory is empty.
#[derive(Debug, Clone, Default)]
pub struct LabDirectory {
    entries: HashMap<String, LabInfo>,
}

impl LabDirectory {
    /// Builds the directory from parsed labs csv rows.
    /// Rows without a Slug cell are skipped, nothing else is validated.
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        let entries = rows
            .into_iter()
            .filter_map(|mut row| {
                let slug = row.remove("Slug").filter(|s| !s.is_empty())?;
                let full_name = row.remove("Name").unwrap_or_else(|| slug.clone());

                let info = LabInfo {
                    full_name,
                    canonical_slug: slug.clone(),
                };

                Some((slug.to_lowercase(), info))
            })
            .collect();

        LabDirectory { entries }
    }

    /// Display name for a lab slug, or the slug itself when unknown.
    pub fn full_name<'a>(&'a self, slug: &'a str) -> &'a str {
        match self.entries.get(&slug.to_lowercase()) {
            Some(info) => &info.full_name,
            None => slug,
        }
    }

    /// The slug external links should use, or the raw slug when unknown.
    pub fn canonical_slug<'a>(&'a self, slug: &'a str) -> &'a str {
        match self.entries.get(&slug.to_lowercase()) {
            Some(info) => &info.canonical_slug,
            None => slug,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> LabDirectory {
        let row: RawRow = [
            ("Slug".to_owned(), "OpenAI".to_owned()),
            ("Name".to_owned(), "OpenAI Inc".to_owned()),
        ]
        .into_iter()
        .collect();

        LabDirectory::from_rows(vec![row])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let labs = directory();

        assert_eq!(labs.full_name("openai"), "OpenAI Inc");
        assert_eq!(labs.full_name("OPENAI"), "OpenAI Inc");
    }

    #[test]
    fn unknown_slug_falls_back_to_itself() {
        let labs = directory();

        assert_eq!(labs.full_name("mystery-lab"), "mystery-lab");
        assert_eq!(labs.canonical_slug("mystery-lab"), "mystery-lab");
    }

    #[test]
    fn empty_directory_is_all_fallback() {
        let labs = LabDirectory::default();

        assert!(labs.is_empty());
        assert_eq!(labs.full_name("anthropic"), "anthropic");
    }
}
