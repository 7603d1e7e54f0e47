//! Query string decoding.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Decoded query string, keyed by decoded parameter name.
pub type Query = HashMap<String, QueryValue>;

/// Value of one query parameter.
///
/// A key seen once holds a single value; a repeated key accumulates its
/// values in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
	/// The key appeared once.
	Single(String),
	/// The key appeared more than once.
	Multiple(Vec<String>),
}

impl QueryValue {
	/// Returns the value if the key appeared exactly once.
	pub fn as_single(&self) -> Option<&str> {
		match self {
			Self::Single(value) => Some(value),
			Self::Multiple(_) => None,
		}
	}

	/// Returns every value in order of appearance.
	pub fn values(&self) -> Vec<&str> {
		match self {
			Self::Single(value) => vec![value.as_str()],
			Self::Multiple(values) => values.iter().map(String::as_str).collect(),
		}
	}

	fn push(&mut self, value: String) {
		match self {
			Self::Single(first) => {
				let first = std::mem::take(first);
				*self = Self::Multiple(vec![first, value]);
			}
			Self::Multiple(values) => values.push(value),
		}
	}
}

/// Parses a raw query string (without the leading `?`).
///
/// Pairs are separated by `&` and split on the first `=`. Keys and values are
/// percent-decoded with `+` read as a space; a pair without `=` has an empty
/// value. Pairs with an empty key or invalid UTF-8 after decoding are skipped.
///
/// # Example
///
/// ```
/// use wayfinder_routes::{QueryValue, parse_query};
///
/// let query = parse_query("a=1&a=2&q=hello+world");
///
/// assert_eq!(
/// 	query["a"],
/// 	QueryValue::Multiple(vec!["1".to_string(), "2".to_string()])
/// );
/// assert_eq!(query["q"].as_single(), Some("hello world"));
/// ```
pub fn parse_query(search: &str) -> Query {
	let mut query = Query::new();

	for pair in search.split('&').filter(|pair| !pair.is_empty()) {
		let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));

		let (Some(key), Some(value)) = (decode_component(raw_key), decode_component(raw_value))
		else {
			tracing::trace!(pair, "skipping undecodable query pair");
			continue;
		};
		if key.is_empty() {
			tracing::trace!(pair, "skipping query pair without a key");
			continue;
		}

		match query.entry(key) {
			Entry::Occupied(mut entry) => entry.get_mut().push(value),
			Entry::Vacant(entry) => {
				entry.insert(QueryValue::Single(value));
			}
		}
	}

	query
}

/// Percent-decodes a form-encoded component, reading `+` as a space.
fn decode_component(raw: &str) -> Option<String> {
	let spaced = raw.replace('+', " ");
	urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}
