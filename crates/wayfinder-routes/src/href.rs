//! Resolution of hrefs into absolute URLs.

use crate::error::RouteError;
use url::Url;

/// Base URL used when no location is available to resolve relative hrefs.
pub const DEFAULT_BASE: &str = "http://localhost/";

/// Resolves `href` against `base`, the way an anchor element resolves its
/// `href` attribute against the document location.
pub fn resolve_href(base: &str, href: &str) -> Result<Url, RouteError> {
	let invalid = |source| RouteError::InvalidHref {
		href: href.to_string(),
		source,
	};

	Url::parse(base).and_then(|base| base.join(href)).map_err(invalid)
}

/// Resolves `href` against [`DEFAULT_BASE`].
pub fn parse_href(href: &str) -> Result<Url, RouteError> {
	resolve_href(DEFAULT_BASE, href)
}
