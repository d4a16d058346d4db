use crate::error::CalcError;

const PLAYLIST_MARKER: &str = "list=";

/// Local check applied before any request is made.
pub fn validate_playlist_url(input: &str) -> Result<(), CalcError> {
    if input.contains(PLAYLIST_MARKER) {
        Ok(())
    } else {
        Err(CalcError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_playlist_link() {
        assert!(validate_playlist_url("https://youtube.com/playlist?list=PL123").is_ok());
        assert!(validate_playlist_url("https://www.youtube.com/watch?v=abc&list=PL9").is_ok());
    }

    #[test]
    fn test_rejects_video_link() {
        let err = validate_playlist_url("https://www.youtube.com/watch?v=abc").unwrap_err();
        assert!(matches!(err, CalcError::Validation));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(validate_playlist_url("").is_err());
    }
}
