//! HTTP request handlers.

pub(crate) mod api;
pub(crate) mod pages;
pub(crate) mod sidebar;
pub(crate) mod theme;

use jb_source::PageAddress;

use crate::error::ServerError;

/// Parse a request path (without the route prefix) into a page address.
pub(crate) fn parse_address(path: &str) -> Result<PageAddress, ServerError> {
    PageAddress::from_segments(path.split('/')).map_err(|source| ServerError::PageNotFound {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("").unwrap(), PageAddress::root());
        assert_eq!(parse_address("intro/").unwrap().segments(), ["intro"]);
        assert_eq!(
            parse_address("sql/select/joins").unwrap().segments(),
            ["sql", "select", "joins"]
        );
    }

    #[test]
    fn test_parse_address_rejects_deep_paths() {
        assert!(matches!(
            parse_address("a/b/c/d"),
            Err(ServerError::PageNotFound { .. })
        ));
        assert!(matches!(
            parse_address("a//c"),
            Err(ServerError::PageNotFound { .. })
        ));
    }
}
