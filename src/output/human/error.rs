// Human error line

pub fn render_error(code: &str, message: &str) -> String {
    format!("tuneup: {code}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::error::InputError;
    use std::path::PathBuf;

    #[test]
    fn includes_code_and_path() {
        let err = InputError::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(
            render_error(err.code(), &err.to_string()),
            "tuneup: E_NOT_FOUND: source not found: missing.txt"
        );
    }
}
