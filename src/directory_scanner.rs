// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for image sequences.
//!
//! A directory handed to the viewer is treated as one sequence whose frames are
//! its supported image files in natural file name order (`f2.png` before `f10.png`).

use crate::error::{ImageError, Result};
use std::path::{Path, PathBuf};

/// Image file extensions the `image` crate is built to decode.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Checks if a file has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists the supported images of `directory` in natural name order.
///
/// Returns [`ImageError::EmptySequence`] when the directory holds no supported image.
pub fn scan_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    if images.is_empty() {
        return Err(ImageError::EmptySequence.into());
    }

    alphanumeric_sort::sort_path_slice(&mut images);
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.PNG")));
        assert!(is_supported_image(Path::new("dir/b.jpeg")));
        assert!(!is_supported_image(Path::new("c.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn scan_images_skips_other_files_and_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "a.png");
        touch(temp_dir.path(), "notes.txt");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");

        let images = scan_images(temp_dir.path()).expect("scan should succeed");
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn scan_images_sorts_naturally() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let f10 = touch(temp_dir.path(), "f10.png");
        let f2 = touch(temp_dir.path(), "f2.png");
        let f1 = touch(temp_dir.path(), "f1.png");

        let images = scan_images(temp_dir.path()).expect("scan should succeed");
        assert_eq!(images, vec![f1, f2, f10]);
    }

    #[test]
    fn scan_images_of_empty_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(matches!(
            scan_images(temp_dir.path()),
            Err(Error::Image(ImageError::EmptySequence))
        ));
    }
}
