use crate::domain::errors::AppError;
use crate::domain::url_validator::is_valid_url;
use serde_json::Value;

/// Joins a base API URL and a URI fragment using standard URL resolution.
///
/// A relative fragment replaces the last path segment of the base, a fragment
/// starting with `/` replaces the whole path and an absolute fragment replaces
/// the base entirely. Whitespace is never percent-encoded on the caller's
/// behalf: a fragment containing any is an invalid URL.
pub fn build_url(base: &str, fragment: &str) -> Result<String, AppError> {
    if fragment.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidUrl);
    }
    let base = url::Url::parse(base).map_err(|_| AppError::InvalidUrl)?;
    let joined = base.join(fragment).map_err(|_| AppError::InvalidUrl)?;
    Ok(joined.into())
}

/// Represents a validated URL
#[derive(Debug, Clone, PartialEq)]
pub struct Url(pub url::Url);

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The fully composed URL string
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL
    /// * `Err(AppError::InvalidUrl)` - If the URL does not pass the validator
    pub fn new(url: &str) -> Result<Self, AppError> {
        if !is_valid_url(url) {
            return Err(AppError::InvalidUrl);
        }
        let parsed = url::Url::parse(url).map_err(|_| AppError::InvalidUrl)?;
        Ok(Url(parsed))
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Request data decoded from relaxed JSON
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

impl Payload {
    /// Decodes a payload written as JSON5: unquoted keys, trailing commas,
    /// single-quoted strings and comments are accepted along with plain JSON.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        json5::from_str::<Value>(raw)
            .map(Payload)
            .map_err(|e| AppError::PayloadDecode(e.to_string()))
    }

    pub fn is_mapping(&self) -> bool {
        self.0.is_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relative_fragment_extends_base() {
        let url = build_url("https://api.example.com/", "users/1").unwrap();
        assert_eq!(url, "https://api.example.com/users/1");
        assert!(Url::new(&url).is_ok());
    }

    #[test]
    fn relative_fragment_replaces_last_segment() {
        let url = build_url("https://api.example.com/v1/posts", "comments?postId=1").unwrap();
        assert_eq!(url, "https://api.example.com/v1/comments?postId=1");
    }

    #[test]
    fn rooted_and_absolute_fragments() {
        assert_eq!(
            build_url("https://api.example.com/v1/", "/health").unwrap(),
            "https://api.example.com/health"
        );
        assert_eq!(
            build_url("https://api.example.com/v1/", "http://localhost:8080/users").unwrap(),
            "http://localhost:8080/users"
        );
    }

    #[test]
    fn unparsable_base_is_invalid_url() {
        assert!(matches!(
            build_url("not a url", "users/1"),
            Err(AppError::InvalidUrl)
        ));
    }

    #[test]
    fn fragment_with_whitespace_is_invalid_url() {
        for fragment in ["not a url", "users/1 2", "users?q=a b", "users\t1"] {
            assert!(
                matches!(
                    build_url("https://jsonplaceholder.typicode.com/", fragment),
                    Err(AppError::InvalidUrl)
                ),
                "expected {fragment:?} to be rejected"
            );
        }
    }

    #[test]
    fn url_rejects_single_label_host() {
        assert!(matches!(
            Url::new("http://intranet/users"),
            Err(AppError::InvalidUrl)
        ));
    }

    #[test]
    fn payload_accepts_relaxed_json() {
        let payload = Payload::parse("{title: 'foo', tags: ['a', 'b',], }").unwrap();
        assert_eq!(payload.0, json!({"title": "foo", "tags": ["a", "b"]}));
        assert!(payload.is_mapping());
    }

    #[test]
    fn payload_accepts_strict_json() {
        let payload = Payload::parse(r#"["x", true, null]"#).unwrap();
        assert_eq!(payload.0, json!(["x", true, null]));
        assert!(!payload.is_mapping());
    }

    #[test]
    fn payload_rejects_garbage() {
        assert!(matches!(
            Payload::parse("{title: "),
            Err(AppError::PayloadDecode(_))
        ));
    }
}
