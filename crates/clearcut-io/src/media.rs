//! Media-type derivation and validation for selected files.
//!
//! The Dioxus file abstraction exposes the filename but not the
//! browser's declared MIME type, so the declared type is derived from
//! the extension here.  Both the drag-and-drop and file-picker paths
//! run the same gate — only files whose media type starts with
//! `image/` are forwarded for processing; anything else is silently
//! ignored and leaves the processing status untouched.

/// Extension → media type table, covering every raster format the
/// browser (and therefore the removal collaborator, which decodes via
/// the browser) can be expected to handle.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("avif", "image/avif"),
];

/// Derive the declared media type for a filename.
///
/// Matching is case-insensitive on the extension.  Returns `None` for
/// files with no extension or an extension outside the supported set.
#[must_use]
pub fn media_type_for(filename: &str) -> Option<&'static str> {
    let (_, ext) = filename.rsplit_once('.')?;
    MEDIA_TYPES
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|(_, media_type)| *media_type)
}

/// Whether a media type identifies an image.
#[must_use]
pub fn is_image(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Derive and gate in one step: the media type for `filename` if and
/// only if it is an image type.
#[must_use]
pub fn image_media_type_for(filename: &str) -> Option<&'static str> {
    media_type_for(filename).filter(|m| is_image(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_image_types() {
        assert_eq!(media_type_for("cat.jpg"), Some("image/jpeg"));
        assert_eq!(media_type_for("cat.jpeg"), Some("image/jpeg"));
        assert_eq!(media_type_for("cat.png"), Some("image/png"));
        assert_eq!(media_type_for("cat.webp"), Some("image/webp"));
    }

    #[test]
    fn secondary_raster_formats_are_accepted() {
        // Anything the browser itself decodes should pass the gate,
        // not just the formats named in the upload hint.
        assert_eq!(media_type_for("photo.gif"), Some("image/gif"));
        assert_eq!(media_type_for("photo.bmp"), Some("image/bmp"));
        assert_eq!(media_type_for("photo.avif"), Some("image/avif"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(media_type_for("SHOUTING.JPG"), Some("image/jpeg"));
        assert_eq!(media_type_for("Mixed.PnG"), Some("image/png"));
    }

    #[test]
    fn non_image_files_are_rejected() {
        assert_eq!(media_type_for("notes.txt"), None);
        assert_eq!(media_type_for("archive.tar.gz"), None);
        assert_eq!(media_type_for("no-extension"), None);
        assert_eq!(image_media_type_for("notes.txt"), None);
    }

    #[test]
    fn dotfiles_and_trailing_dots_are_rejected() {
        assert_eq!(media_type_for(".gitignore"), None);
        assert_eq!(media_type_for("cat."), None);
    }

    #[test]
    fn derived_types_pass_the_image_gate() {
        for (_, media_type) in MEDIA_TYPES {
            assert!(is_image(media_type), "{media_type} should be an image type");
        }
        assert!(!is_image("text/plain"));
        assert!(!is_image("application/pdf"));
    }

    #[test]
    fn gate_accepts_only_images() {
        assert_eq!(image_media_type_for("cat.jpg"), Some("image/jpeg"));
        assert_eq!(image_media_type_for("cat.txt"), None);
    }
}
