/// Builds the greeting without printing it, so callers can test the text.
pub fn greet(name: &str) -> String {
    format!("Hello, {}", name)
}

/// Writes the greeting to stdout, one line per message.
pub fn greet_user(name: &str) {
    println!("{}", greet(name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("Alice"), "Hello, Alice");
    }

    #[test]
    fn test_greet_empty_name() {
        assert_eq!(greet(""), "Hello, ");
    }
}
