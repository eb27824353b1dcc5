use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY)
                && let Value::Short(values) = &field.value
                && let Some(orientation) = values.first()
            {
                return *orientation;
            }
            1
        }
        Err(e) => {
            // Not fatal, the image is shown unrotated
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to load image data for {}: {}", image_path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        assert!(is_image(Path::new("a/b/photo.JPG")));
        assert!(is_image(Path::new("banner.png")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("README")));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = load_sorted_image_paths(Path::new("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn test_directory_without_images_is_an_error() {
        let dir = std::env::temp_dir().join(format!("rotator-no-images-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "not an image").unwrap();

        let result = load_sorted_image_paths(&dir);
        fs::remove_dir_all(&dir).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("No image files found"));
    }

    #[test]
    fn test_images_are_sorted_by_name() {
        let dir = std::env::temp_dir().join(format!("rotator-sorted-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["b.png", "a.jpg", "c.txt"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let result = load_sorted_image_paths(&dir);
        fs::remove_dir_all(&dir).unwrap();

        let names: Vec<String> = result
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }
}
