//! Card artwork on disk.

use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbImage};

use crate::card::{Card, Orientation};
use crate::error::{TarotError, TarotResult};

/// JPEG quality for re-encoded (rotated) artwork.
const JPEG_QUALITY: u8 = 90;

/// Image bytes ready to be attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown to the recipient.
    pub filename: String,
    /// Encoded image.
    pub bytes: Vec<u8>,
}

/// Directory of card images, named by [`Card::artwork_filename`].
#[derive(Debug, Clone)]
pub struct ArtworkStore {
    dir: PathBuf,
}

impl ArtworkStore {
    /// Serve artwork from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The artwork directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the artwork for `card` should be.
    pub fn path(&self, card: &Card) -> PathBuf {
        self.dir.join(card.artwork_filename())
    }

    /// Whether the artwork for `card` exists.
    pub fn contains(&self, card: &Card) -> bool {
        self.path(card).is_file()
    }

    /// Read the artwork for `card`, turned upside down when reversed.
    pub fn load(&self, card: &Card, orientation: Orientation) -> TarotResult<Attachment> {
        let path = self.path(card);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(card = %card.name, path = %path.display(), "artwork missing");
                return Err(TarotError::AssetMissing(card.name.clone()));
            }
            Err(source) => return Err(TarotError::ArtworkRead { path, source }),
        };
        let bytes = match orientation {
            Orientation::Upright => bytes,
            Orientation::Reversed => rotate_half_turn(&bytes)?,
        };
        Ok(Attachment {
            filename: card.artwork_filename(),
            bytes,
        })
    }
}

/// Rotate an encoded image by 180 degrees and re-encode it as JPEG.
pub fn rotate_half_turn(bytes: &[u8]) -> TarotResult<Vec<u8>> {
    let rotated = image::load_from_memory(bytes)?.rotate180().to_rgb8();
    encode_jpeg(&rotated)
}

fn encode_jpeg(img: &RgbImage) -> TarotResult<Vec<u8>> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).encode(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}
