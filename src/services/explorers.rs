//! Block and IPFS explorer registries.
//!
//! Named providers map to URL bases; a trailing "Custom URL" entry lets
//! the user supply their own. Custom text is stored either as a plain
//! string or, when it parses as a literal tuple of quoted strings, as
//! the parsed parts — older configs persisted URL templates that way and
//! both shapes must keep round-tripping.

use serde_json::Value;

use crate::config::{keys, ConfigStore};

/// Combo entry selecting the free-text URL input.
pub const CUSTOM_ITEM: &str = "Custom URL";

/// A registered explorer provider.
#[derive(Debug, Clone, Copy)]
pub struct Explorer {
    /// Provider name, also the persisted config value.
    pub name: &'static str,
    /// URL base the wallet opens in a browser.
    pub base_url: &'static str,
}

/// Registered block explorers.
pub const BLOCK_EXPLORERS: &[Explorer] = &[
    Explorer {
        name: "kawscan.io",
        base_url: "https://kawscan.io/",
    },
    Explorer {
        name: "corvid.network",
        base_url: "https://explorer.corvid.network/",
    },
    Explorer {
        name: "blockbook",
        base_url: "https://blockbook.corvid.network/",
    },
];

/// Registered IPFS gateways.
pub const IPFS_EXPLORERS: &[Explorer] = &[
    Explorer {
        name: "ipfs.io",
        base_url: "https://ipfs.io/ipfs/",
    },
    Explorer {
        name: "cloudflare-ipfs",
        base_url: "https://cloudflare-ipfs.com/ipfs/",
    },
];

/// Block explorer names, sorted, with the custom entry appended last.
pub fn block_explorer_names() -> Vec<&'static str> {
    names_with_custom(BLOCK_EXPLORERS)
}

/// IPFS explorer names, sorted, with the custom entry appended last.
pub fn ipfs_explorer_names() -> Vec<&'static str> {
    names_with_custom(IPFS_EXPLORERS)
}

fn names_with_custom(table: &'static [Explorer]) -> Vec<&'static str> {
    let mut names: Vec<_> = table.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names.push(CUSTOM_ITEM);
    names
}

/// Configured block explorer name, or `None` when a custom URL is set.
/// The custom key always takes precedence over the named one.
pub fn block_explorer(config: &impl ConfigStore) -> Option<&'static str> {
    configured_explorer(config, keys::BLOCK_EXPLORER, keys::BLOCK_EXPLORER_CUSTOM, BLOCK_EXPLORERS)
}

/// Configured IPFS explorer name, or `None` when a custom URL is set.
pub fn ipfs_explorer(config: &impl ConfigStore) -> Option<&'static str> {
    configured_explorer(config, keys::IPFS_EXPLORER, keys::IPFS_EXPLORER_CUSTOM, IPFS_EXPLORERS)
}

fn configured_explorer(
    config: &impl ConfigStore,
    key: &str,
    custom_key: &str,
    table: &'static [Explorer],
) -> Option<&'static str> {
    if config.get(custom_key).is_some() {
        return None;
    }
    let configured = config.get_str(key);
    table
        .iter()
        .map(|e| e.name)
        .find(|name| Some(*name) == configured)
        .or_else(|| table.first().map(|e| e.name))
}

/// Interpret custom-URL free text for storage.
///
/// Tries a literal tuple of quoted strings first, so URL templates like
/// `('https://x/', 'tx')` persist as parts; anything that does not parse
/// is stored verbatim as an opaque string, never an error.
pub fn parse_custom_entry(text: &str) -> Value {
    match parse_literal_tuple(text) {
        Some(items) => Value::Array(items.into_iter().map(Value::from).collect()),
        None => Value::String(text.to_string()),
    }
}

/// Render a stored custom entry back to editor text. Inverse of
/// [`parse_custom_entry`] for both stored shapes.
pub fn custom_entry_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| format!("'{s}'"))
                .collect();
            format!("({})", parts.join(", "))
        }
        _ => String::new(),
    }
}

// Quoted items only, no escapes; trailing comma accepted.
fn parse_literal_tuple(text: &str) -> Option<Vec<String>> {
    let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
    let mut items = Vec::new();
    let mut rest = inner.trim_start();
    while !rest.is_empty() {
        let quote = rest.chars().next()?;
        if quote != '\'' && quote != '"' {
            return None;
        }
        let body = &rest[1..];
        let end = body.find(quote)?;
        items.push(body[..end].to_string());
        rest = body[end + 1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
        } else if !rest.is_empty() {
            return None;
        }
    }
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalletConfig;

    #[test]
    fn custom_entry_is_last() {
        let names = block_explorer_names();
        assert_eq!(names.last(), Some(&CUSTOM_ITEM));
    }

    #[test]
    fn non_literal_text_stays_a_string() {
        assert_eq!(
            parse_custom_entry("not-a-tuple("),
            Value::String("not-a-tuple(".into())
        );
        assert_eq!(
            parse_custom_entry("https://example.org/tx/"),
            Value::String("https://example.org/tx/".into())
        );
    }

    #[test]
    fn literal_tuple_parses_to_parts() {
        assert_eq!(
            parse_custom_entry("('a','b')"),
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(
            parse_custom_entry("(\"https://x/\", 'tx',)"),
            Value::Array(vec![Value::from("https://x/"), Value::from("tx")])
        );
    }

    #[test]
    fn custom_entry_text_roundtrips() {
        for text in ["https://example.org/tx/", "('https://x/', 'tx')"] {
            let stored = parse_custom_entry(text);
            let shown = custom_entry_text(&stored);
            assert_eq!(parse_custom_entry(&shown), stored);
        }
    }

    #[test]
    fn custom_key_shadows_named_explorer() {
        let mut config = WalletConfig::new();
        config.set_key(keys::BLOCK_EXPLORER, Value::from("kawscan.io"), false);
        assert_eq!(block_explorer(&config), Some("kawscan.io"));

        config.set_key(keys::BLOCK_EXPLORER_CUSTOM, Value::from("https://my/"), false);
        assert_eq!(block_explorer(&config), None);
    }

    #[test]
    fn unknown_name_falls_back_to_first_entry() {
        let mut config = WalletConfig::new();
        config.set_key(keys::BLOCK_EXPLORER, Value::from("gone"), false);
        assert_eq!(block_explorer(&config), Some(BLOCK_EXPLORERS[0].name));
    }
}
