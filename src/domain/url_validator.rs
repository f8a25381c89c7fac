use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_REGEX: Regex = Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        r"localhost|",
        r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .unwrap();
}

/// Checks that a fully composed URL has an accepted scheme (http, https, ftp,
/// ftps), a domain name, `localhost` or dotted-quad host, an optional port and
/// an optional path or query without whitespace.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_urls() {
        let valid = [
            "https://jsonplaceholder.typicode.com/",
            "http://api.example.com/users/1",
            "HTTPS://API.EXAMPLE.COM/Users?id=1",
            "http://localhost",
            "http://localhost:8080/items",
            "http://127.0.0.1:3000/todos?done=true",
            "ftp://files.example.org/pub/file.txt",
            "ftps://files.example.org",
            "https://sub-domain.example.co.uk:443/a/b",
        ];
        for url in valid {
            assert!(is_valid_url(url), "expected {url} to be accepted");
        }
    }

    #[test]
    fn rejects_missing_scheme_or_host() {
        let invalid = [
            "",
            "not a url",
            "api.example.com/users",
            "://api.example.com",
            "https://",
            "https:///users",
            "mailto:someone@example.com",
            "file:///etc/passwd",
            "https://intranet/users",
            "https://api.example.com/users with spaces",
        ];
        for url in invalid {
            assert!(!is_valid_url(url), "expected {url} to be rejected");
        }
    }
}
