/// Hello returns a greeting for the named person.
pub fn hello(name: &str) -> String {
    format!("Hi, {}. Welcome!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        assert_eq!(hello("Ashish"), "Hi, Ashish. Welcome!");
    }

    #[test]
    fn test_hello_keeps_name_verbatim() {
        for name in ["a", " padded ", "世界", "O'Brien", "{}"] {
            assert!(hello(name).contains(name));
        }
    }

    #[test]
    fn test_hello_empty_name() {
        assert_eq!(hello(""), "Hi, . Welcome!");
    }
}
