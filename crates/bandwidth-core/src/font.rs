//! Label font, loaded once at startup.
//!
//! The font is a hard startup requirement: a missing, unreadable or
//! non-sfnt file is reported as [`Error::ResourceUnavailable`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// sfnt container flavors accepted as a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    TrueType,
    OpenType,
    Collection,
}

impl std::fmt::Display for FontFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueType => write!(f, "truetype"),
            Self::OpenType => write!(f, "opentype"),
            Self::Collection => write!(f, "collection"),
        }
    }
}

impl FontFormat {
    /// Identify the container from the first four bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        let magic: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        match &magic {
            b"\x00\x01\x00\x00" | b"true" => Some(Self::TrueType),
            b"OTTO" => Some(Self::OpenType),
            b"ttcf" => Some(Self::Collection),
            _ => None,
        }
    }
}

/// A font file checked at startup.
#[derive(Debug, Clone)]
pub struct FontFace {
    path: PathBuf,
    format: FontFormat,
}

impl FontFace {
    /// Read and check the font at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |reason: String| Error::ResourceUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let data = fs::read(path).map_err(|e| unavailable(e.to_string()))?;
        let format = FontFormat::sniff(&data)
            .ok_or_else(|| unavailable("not a TrueType/OpenType font".into()))?;

        log::info!(
            "loaded {format} font {} ({} bytes)",
            path.display(),
            data.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    /// File stem, e.g. `DejaVuSans-Bold`.
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font")
    }

    /// Name plus container, e.g. `DejaVuSans-Bold (truetype)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn font_file(header: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new()
            .suffix(".ttf")
            .tempfile()
            .unwrap();
        f.write_all(header).unwrap();
        f.write_all(&[0u8; 60]).unwrap();
        f
    }

    #[test]
    fn sniff_known_signatures() {
        assert_eq!(
            FontFormat::sniff(&[0, 1, 0, 0, 9]),
            Some(FontFormat::TrueType)
        );
        assert_eq!(FontFormat::sniff(b"true...."), Some(FontFormat::TrueType));
        assert_eq!(FontFormat::sniff(b"OTTO"), Some(FontFormat::OpenType));
        assert_eq!(FontFormat::sniff(b"ttcf"), Some(FontFormat::Collection));
    }

    #[test]
    fn sniff_rejects_short_or_foreign_data() {
        assert_eq!(FontFormat::sniff(&[0, 1, 0]), None);
        assert_eq!(FontFormat::sniff(b"\x89PNG"), None);
        assert_eq!(FontFormat::sniff(&[]), None);
    }

    #[test]
    fn load_accepts_truetype() {
        let f = font_file(&[0x00, 0x01, 0x00, 0x00]);
        let face = FontFace::load(f.path()).unwrap();
        assert_eq!(face.format(), FontFormat::TrueType);
        assert_eq!(face.path(), f.path());
    }

    #[test]
    fn load_missing_file_is_resource_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("DejaVuSans-Bold.ttf");
        let err = FontFace::load(&missing).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
        assert!(err.to_string().contains("DejaVuSans-Bold.ttf"));
    }

    #[test]
    fn load_non_font_is_resource_unavailable() {
        let f = font_file(b"<svg");
        let err = FontFace::load(f.path()).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
        assert!(err.to_string().contains("not a TrueType/OpenType font"));
    }

    #[test]
    fn name_is_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DejaVuSans-Bold.ttf");
        fs::write(&path, b"OTTO____").unwrap();
        let face = FontFace::load(&path).unwrap();
        assert_eq!(face.name(), "DejaVuSans-Bold");
        assert_eq!(face.format(), FontFormat::OpenType);
        assert_eq!(face.label(), "DejaVuSans-Bold (opentype)");
    }
}
