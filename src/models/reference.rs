use crate::error::ReferenceDataError;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// # Reference Set
///
/// An immutable set of lowercase strings (domains or TLDs).
///
/// Entries are kept in lexicographic order, so any scan over the set visits
/// members in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    entries: BTreeSet<String>,
}

impl ReferenceSet {
    /// Parses a line-delimited source: one token per line, surrounding
    /// whitespace trimmed, blank lines ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut entries = BTreeSet::new();
        for line in reader.lines() {
            let line = line?;
            let token = line.trim();
            if !token.is_empty() {
                entries.insert(token.to_lowercase());
            }
        }
        Ok(Self { entries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let read_err = |source| ReferenceDataError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        Self::from_reader(BufReader::new(file)).map_err(read_err)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { entries }
    }
}

/// Locations of the three line-delimited reference lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSources {
    pub popular_domains: PathBuf,
    pub popular_tlds: PathBuf,
    pub disposable_domains: PathBuf,
}

impl ReferenceSources {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            popular_domains: dir.join("popular_domains.txt"),
            popular_tlds: dir.join("popular_tlds.txt"),
            disposable_domains: dir.join("disposable_domains.txt"),
        }
    }
}

/// # Reference Data
///
/// The three reference sets the validator consults. Built once and shared
/// read-only by every validation; cloning only bumps reference counts.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    popular_domains: Arc<ReferenceSet>,
    popular_tlds: Arc<ReferenceSet>,
    disposable_domains: Arc<ReferenceSet>,
}

impl ReferenceData {
    pub fn new(
        popular_domains: ReferenceSet,
        popular_tlds: ReferenceSet,
        disposable_domains: ReferenceSet,
    ) -> Self {
        Self {
            popular_domains: Arc::new(popular_domains),
            popular_tlds: Arc::new(popular_tlds),
            disposable_domains: Arc::new(disposable_domains),
        }
    }

    pub fn builder() -> ReferenceDataBuilder {
        ReferenceDataBuilder::default()
    }

    /// Loads all three sets from their files.
    pub fn load(sources: &ReferenceSources) -> Result<Self, ReferenceDataError> {
        Self::builder().load_missing(sources)
    }

    pub fn popular_domains(&self) -> &ReferenceSet {
        &self.popular_domains
    }

    pub fn popular_tlds(&self) -> &ReferenceSet {
        &self.popular_tlds
    }

    pub fn disposable_domains(&self) -> &ReferenceSet {
        &self.disposable_domains
    }
}

/// Collects directly supplied sets; whatever is not supplied is either left
/// empty ([`build`](Self::build)) or read from disk
/// ([`load_missing`](Self::load_missing)).
#[derive(Debug, Default)]
pub struct ReferenceDataBuilder {
    popular_domains: Option<ReferenceSet>,
    popular_tlds: Option<ReferenceSet>,
    disposable_domains: Option<ReferenceSet>,
}

impl ReferenceDataBuilder {
    pub fn popular_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.popular_domains = Some(domains.into_iter().collect());
        self
    }

    pub fn popular_tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.popular_tlds = Some(tlds.into_iter().collect());
        self
    }

    pub fn disposable_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disposable_domains = Some(domains.into_iter().collect());
        self
    }

    pub fn build(self) -> ReferenceData {
        ReferenceData::new(
            self.popular_domains.unwrap_or_default(),
            self.popular_tlds.unwrap_or_default(),
            self.disposable_domains.unwrap_or_default(),
        )
    }

    /// Reads every set that was not supplied directly from `sources`.
    ///
    /// A supplied set is kept even when it is empty.
    pub fn load_missing(self, sources: &ReferenceSources) -> Result<ReferenceData, ReferenceDataError> {
        let load = |supplied: Option<ReferenceSet>, path: &Path| match supplied {
            Some(set) => Ok(set),
            None => ReferenceSet::from_file(path),
        };

        Ok(ReferenceData::new(
            load(self.popular_domains, &sources.popular_domains)?,
            load(self.popular_tlds, &sources.popular_tlds)?,
            load(self.disposable_domains, &sources.disposable_domains)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shipped_sources() -> ReferenceSources {
        ReferenceSources::in_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_from_reader_trims_and_skips_blank_lines() {
        let source = "gmail.com\n\n   yahoo.com  \n\t\nOutlook.COM\r\n";
        let set = ReferenceSet::from_reader(Cursor::new(source)).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.contains("gmail.com"));
        assert!(set.contains("yahoo.com"));
        assert!(set.contains("outlook.com"));
    }

    #[test]
    fn test_iteration_is_lexicographic() {
        let set: ReferenceSet = ["net", "com", "org"].into_iter().collect();
        let ordered: Vec<&str> = set.iter().collect();
        assert_eq!(ordered, vec!["com", "net", "org"]);
    }

    #[test]
    fn test_from_file_missing_reports_path() {
        let err = ReferenceSet::from_file("does/not/exist.txt").unwrap_err();
        let ReferenceDataError::Read { path, .. } = err;
        assert_eq!(path, PathBuf::from("does/not/exist.txt"));
    }

    #[test]
    fn test_builder_without_files_leaves_unsupplied_sets_empty() {
        let data = ReferenceData::builder()
            .popular_domains(["gmail.com"])
            .build();

        assert!(data.popular_domains().contains("gmail.com"));
        assert!(data.popular_tlds().is_empty());
        assert!(data.disposable_domains().is_empty());
    }

    #[test]
    fn test_load_shipped_lists() {
        let data = ReferenceData::load(&shipped_sources()).unwrap();

        assert!(data.popular_domains().contains("gmail.com"));
        assert!(data.popular_tlds().contains("com"));
        assert!(data.disposable_domains().contains("mailinator.com"));
    }

    #[test]
    fn test_supplied_empty_set_is_not_replaced_by_file() {
        let data = ReferenceData::builder()
            .popular_tlds(Vec::<String>::new())
            .load_missing(&shipped_sources())
            .unwrap();

        assert!(data.popular_tlds().is_empty());
        assert!(!data.popular_domains().is_empty());
    }

    #[test]
    fn test_load_missing_propagates_unreadable_source() {
        let mut sources = shipped_sources();
        sources.disposable_domains = PathBuf::from("nowhere/disposable.txt");

        let result = ReferenceData::builder().load_missing(&sources);
        assert!(result.is_err());
    }
}
