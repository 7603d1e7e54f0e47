//! Route template compilation and path matching.
//!
//! Templates are split on `/` after stripping a single leading separator.
//! Every segment is one of:
//!
//! - `literal` - matched exactly against the percent-decoded URL segment
//! - `:name` - matches any single segment and captures it as `name`
//! - `*name` - last segment only; captures the rest of the path, rejoined with `/`
//!
//! Empty segments are significant: `/a//b` only matches a path with an empty
//! segment between `a` and `b`, and the root template `/` only matches the
//! root path.

use crate::error::RouteError;
use std::borrow::Cow;
use std::collections::HashMap;
use url::Url;

/// One segment of a compiled route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Matched exactly.
	Literal(String),
	/// `:name`, captures one segment.
	Param(String),
	/// `*name`, captures the remainder of the path.
	Wildcard(String),
}

/// A compiled route template.
#[derive(Debug, Clone)]
pub struct RoutePattern {
	/// The template as registered.
	template: String,
	/// Compiled segments, in path order.
	segments: Vec<Segment>,
}

impl RoutePattern {
	/// Compiles a route template.
	///
	/// # Errors
	///
	/// - [`RouteError::MisplacedWildcard`] if a `*name` segment is not last
	/// - [`RouteError::EmptyParameterName`] if a `:` or `*` marker has no name
	///
	/// # Example
	///
	/// ```
	/// use wayfinder_routes::{RoutePattern, Segment};
	///
	/// let pattern = RoutePattern::new("/files/:owner/*path").unwrap();
	/// assert!(pattern.has_wildcard());
	/// assert_eq!(pattern.segments()[1], Segment::Param("owner".to_string()));
	/// ```
	pub fn new(template: &str) -> Result<Self, RouteError> {
		let stripped = template.strip_prefix('/').unwrap_or(template);
		let raw_segments: Vec<&str> = stripped.split('/').collect();
		let last = raw_segments.len() - 1;

		let mut segments = Vec::with_capacity(raw_segments.len());
		for (index, raw) in raw_segments.into_iter().enumerate() {
			let segment = if let Some(name) = raw.strip_prefix(':') {
				Segment::Param(Self::parameter_name(template, name)?)
			} else if let Some(name) = raw.strip_prefix('*') {
				if index != last {
					return Err(RouteError::MisplacedWildcard {
						template: template.to_string(),
					});
				}
				Segment::Wildcard(Self::parameter_name(template, name)?)
			} else {
				Segment::Literal(raw.to_string())
			};
			segments.push(segment);
		}

		Ok(Self {
			template: template.to_string(),
			segments,
		})
	}

	fn parameter_name(template: &str, name: &str) -> Result<String, RouteError> {
		if name.is_empty() {
			return Err(RouteError::EmptyParameterName {
				template: template.to_string(),
			});
		}
		Ok(name.to_string())
	}

	/// Returns the template as registered.
	pub fn template(&self) -> &str {
		&self.template
	}

	/// Returns the compiled segments.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns whether the last segment is a wildcard.
	pub fn has_wildcard(&self) -> bool {
		matches!(self.segments.last(), Some(Segment::Wildcard(_)))
	}

	/// Number of segments that must be present in a matching path.
	fn fixed_len(&self) -> usize {
		if self.has_wildcard() {
			self.segments.len() - 1
		} else {
			self.segments.len()
		}
	}

	/// Checks whether the URL's path matches, without building parameters.
	pub fn is_match(&self, url: &Url) -> bool {
		self.walk(url, |_, _| ())
	}

	/// Matches the URL's path and returns the captured parameters.
	///
	/// Wildcard captures are stored under the wildcard's name.
	pub fn captures(&self, url: &Url) -> Option<HashMap<String, String>> {
		let mut params = HashMap::new();
		let matched = self.walk(url, |name, value| {
			params.insert(name.to_string(), value);
		});
		matched.then_some(params)
	}

	/// Walks template and path segments pairwise, reporting each capture.
	///
	/// Returns `false` on the first literal mismatch or length mismatch.
	fn walk<F>(&self, url: &Url, mut capture: F) -> bool
	where
		F: FnMut(&str, String),
	{
		let target = path_segments(url);
		let fixed = self.fixed_len();

		let length_ok = if self.has_wildcard() {
			target.len() >= fixed
		} else {
			target.len() == fixed
		};
		if !length_ok {
			return false;
		}

		for (index, segment) in self.segments.iter().enumerate() {
			match segment {
				Segment::Literal(literal) => {
					if decode_segment(target[index]).as_ref() != literal.as_str() {
						return false;
					}
				}
				Segment::Param(name) => {
					capture(name, decode_segment(target[index]).into_owned());
				}
				Segment::Wildcard(name) => {
					let rest: Vec<Cow<'_, str>> =
						target[index..].iter().map(|raw| decode_segment(raw)).collect();
					capture(name, rest.join("/"));
				}
			}
		}

		true
	}
}

impl PartialEq for RoutePattern {
	fn eq(&self, other: &Self) -> bool {
		self.segments == other.segments
	}
}

impl Eq for RoutePattern {}

impl std::fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.template)
	}
}

/// Splits the URL's path on `/`, after removing the leading separator.
fn path_segments(url: &Url) -> Vec<&str> {
	let path = url.path();
	path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

/// Percent-decodes one path segment, keeping the raw text if it is not UTF-8.
pub(crate) fn decode_segment(raw: &str) -> Cow<'_, str> {
	urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::href::parse_href;
	use rstest::rstest;

	fn url(href: &str) -> Url {
		parse_href(href).unwrap()
	}

	#[rstest]
	fn test_leading_separator_is_optional() {
		let with = RoutePattern::new("/users/:id").unwrap();
		let without = RoutePattern::new("users/:id").unwrap();

		assert_eq!(with, without);
		assert_eq!(with.template(), "/users/:id");
	}

	#[rstest]
	#[case("/", "/", true)]
	#[case("/", "/foo", false)]
	#[case("/foo", "/foo", true)]
	#[case("/foo", "/foo/", false)]
	#[case("/foo", "/bar", false)]
	#[case("/a//b", "/a//b", true)]
	#[case("/a//b", "/a/b", false)]
	#[case("/hello world", "/hello%20world", true)]
	fn test_literal_matching(#[case] template: &str, #[case] href: &str, #[case] expected: bool) {
		let pattern = RoutePattern::new(template).unwrap();
		assert_eq!(pattern.is_match(&url(href)), expected);
	}

	#[rstest]
	fn test_named_parameter_captures_decoded_value() {
		// Arrange
		let pattern = RoutePattern::new("/users/:name/posts/:post").unwrap();

		// Act
		let params = pattern.captures(&url("/users/j%C3%BCrgen/posts/7")).unwrap();

		// Assert
		assert_eq!(params.get("name").map(String::as_str), Some("jürgen"));
		assert_eq!(params.get("post").map(String::as_str), Some("7"));
	}

	#[rstest]
	fn test_parameter_segment_count_must_match() {
		let pattern = RoutePattern::new("/:id").unwrap();

		assert!(pattern.is_match(&url("/bar")));
		assert!(!pattern.is_match(&url("/bar/baz")));
	}

	#[rstest]
	fn test_wildcard_captures_remainder() {
		let pattern = RoutePattern::new("/files/*rest").unwrap();

		let params = pattern.captures(&url("/files/a/b/c")).unwrap();

		assert_eq!(params.get("rest").map(String::as_str), Some("a/b/c"));
	}

	#[rstest]
	fn test_wildcard_decodes_each_segment() {
		let pattern = RoutePattern::new("/files/*rest").unwrap();

		let params = pattern.captures(&url("/files/my%20docs/x%2Fy")).unwrap();

		assert_eq!(params.get("rest").map(String::as_str), Some("my docs/x/y"));
	}

	#[rstest]
	fn test_wildcard_allows_empty_remainder() {
		let pattern = RoutePattern::new("/files/*rest").unwrap();

		let params = pattern.captures(&url("/files")).unwrap();

		assert_eq!(params.get("rest").map(String::as_str), Some(""));
		assert!(!pattern.is_match(&url("/other/a")));
	}

	#[rstest]
	fn test_misplaced_wildcard_is_rejected() {
		let result = RoutePattern::new("/*rest/tail");

		assert!(matches!(result, Err(RouteError::MisplacedWildcard { .. })));
	}

	#[rstest]
	#[case("/users/:")]
	#[case("/files/*")]
	fn test_unnamed_parameter_is_rejected(#[case] template: &str) {
		let result = RoutePattern::new(template);

		assert!(matches!(result, Err(RouteError::EmptyParameterName { .. })));
	}

	#[rstest]
	fn test_pattern_display() {
		let pattern = RoutePattern::new("/users/:id").unwrap();
		assert_eq!(format!("{}", pattern), "/users/:id");
	}
}
