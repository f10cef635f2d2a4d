//! Locating the image to display.

use std::path::{Path, PathBuf};

/// Filenames probed, in order, when no image path is given.
pub const DEFAULT_IMAGE_NAMES: [&str; 3] = ["cats_images.png", "cats_image.jpeg", "cats_image.jpg"];

/// Pick the image to render.
///
/// An explicit path is returned as-is, even if it does not exist, so the
/// caller can report it as missing. Otherwise the first of
/// [`DEFAULT_IMAGE_NAMES`] that exists in `search_dir` is returned.
pub fn locate_image(explicit: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    DEFAULT_IMAGE_NAMES
        .iter()
        .map(|name| search_dir.join(name))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cats_images.png"), b"x").unwrap();
        let found = locate_image(Some(Path::new("other.png")), dir.path());
        assert_eq!(found, Some(PathBuf::from("other.png")));
    }

    #[test]
    fn test_explicit_missing_path_still_returned() {
        let dir = tempfile::tempdir().unwrap();
        let found = locate_image(Some(Path::new("/no/such.png")), dir.path());
        assert_eq!(found, Some(PathBuf::from("/no/such.png")));
    }

    #[test]
    fn test_defaults_probed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cats_image.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("cats_image.jpeg"), b"x").unwrap();
        let found = locate_image(None, dir.path());
        assert_eq!(found, Some(dir.path().join("cats_image.jpeg")));
    }

    #[test]
    fn test_no_default_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate_image(None, dir.path()), None);
    }
}
