//! Asset blacklist/whitelist filter.
//!
//! Both lists are window-level state: line-delimited regular
//! expressions edited as free text. The blacklist hides matching asset
//! names; the whitelist punches exceptions through it. Lines that fail
//! to compile are skipped silently, matching the panel's policy for
//! user-editable free text.

use regex::Regex;
use tracing::debug;

/// Compiled blacklist/whitelist pair.
#[derive(Debug, Default)]
pub struct AssetFilter {
    blacklist_lines: Vec<String>,
    whitelist_lines: Vec<String>,
    blacklist: Vec<Regex>,
    whitelist: Vec<Regex>,
}

impl AssetFilter {
    /// Empty filter hiding nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter from stored line lists.
    pub fn from_lines(blacklist: &[String], whitelist: &[String]) -> Self {
        let mut filter = Self::default();
        filter.set_blacklist(&blacklist.join("\n"));
        filter.set_whitelist(&whitelist.join("\n"));
        filter
    }

    /// Replace the blacklist from editor text. Empty text is an empty
    /// list, not a single empty pattern.
    pub fn set_blacklist(&mut self, text: &str) {
        let (lines, compiled) = compile_lines(text);
        self.blacklist_lines = lines;
        self.blacklist = compiled;
    }

    /// Replace the whitelist from editor text.
    pub fn set_whitelist(&mut self, text: &str) {
        let (lines, compiled) = compile_lines(text);
        self.whitelist_lines = lines;
        self.whitelist = compiled;
    }

    /// Stored blacklist lines, for persistence.
    pub fn blacklist_lines(&self) -> &[String] {
        &self.blacklist_lines
    }

    /// Stored whitelist lines, for persistence.
    pub fn whitelist_lines(&self) -> &[String] {
        &self.whitelist_lines
    }

    /// Whether `asset` is hidden: blacklisted and not whitelisted.
    pub fn is_hidden(&self, asset: &str) -> bool {
        let blacklisted = self.blacklist.iter().any(|re| re.is_match(asset));
        blacklisted && !self.whitelist.iter().any(|re| re.is_match(asset))
    }
}

fn compile_lines(text: &str) -> (Vec<String>, Vec<Regex>) {
    if text.trim().is_empty() {
        return (Vec::new(), Vec::new());
    }
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let compiled = lines
        .iter()
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Regex::new(line) {
            Ok(re) => Some(re),
            Err(e) => {
                debug!("skipping asset filter pattern {line:?}: {e}");
                None
            }
        })
        .collect();
    (lines, compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_hides_whitelist_excepts() {
        let mut filter = AssetFilter::new();
        filter.set_blacklist("^SPAM.*");
        filter.set_whitelist("^SPAMLESS$");
        assert!(filter.is_hidden("SPAM_TOKEN"));
        assert!(!filter.is_hidden("SPAMLESS"));
        assert!(!filter.is_hidden("GOOD_ASSET"));
    }

    #[test]
    fn empty_text_is_empty_list() {
        let mut filter = AssetFilter::new();
        filter.set_blacklist("");
        assert!(filter.blacklist_lines().is_empty());
        assert!(!filter.is_hidden("ANYTHING"));
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let mut filter = AssetFilter::new();
        filter.set_blacklist("([unclosed\n^REAL$");
        assert!(filter.is_hidden("REAL"));
        assert!(!filter.is_hidden("([unclosed"));
    }
}
