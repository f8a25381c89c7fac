use colored::Colorize;
use serde_json::Value;

pub fn error_line(message: &str) -> String {
    format!("{} {}", "ERROR:".red(), message)
}

pub fn success_line(message: &str) -> String {
    format!("{} {}", "SUCCESS:".green(), message)
}

/// Indented, human-readable rendering of a decoded response body
pub fn response_block(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

pub fn print_error(message: &str) {
    println!("{}", error_line(message));
}

pub fn print_success(message: &str) {
    println!("{}", success_line(message));
}

pub fn print_response(data: &Value) {
    println!("{}", response_block(data));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lines_carry_tags() {
        let error = error_line("Specified URL is not valid.");
        assert!(error.contains("ERROR:"));
        assert!(error.ends_with(" Specified URL is not valid."));

        let success = success_line("Http response status code: 200.");
        assert!(success.contains("SUCCESS:"));
        assert!(success.ends_with(" Http response status code: 200."));
    }

    #[test]
    fn response_block_is_indented() {
        let block = response_block(&json!({"id": 1, "tags": ["a"]}));
        assert_eq!(block, "{\n  \"id\": 1,\n  \"tags\": [\n    \"a\"\n  ]\n}");
    }

    #[test]
    fn response_block_handles_scalars() {
        assert_eq!(response_block(&json!("plain")), "\"plain\"");
        assert_eq!(response_block(&json!(null)), "null");
    }
}
