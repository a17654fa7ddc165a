//! Lossless serialization of a canvas.
//!
//! [`save`] owns the destination file for the duration of the call: the file
//! is always closed before returning, and if encoding fails after the file was
//! created it is removed again so no truncated image is left behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png;
use image::{ColorType, ImageEncoder, ImageError, ImageResult};
use log::{info, warn};

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Writes a whole canvas to a byte sink in some raster format.
pub trait RasterEncoder {
    fn encode(&self, canvas: &Canvas, out: &mut dyn Write) -> ImageResult<()>;
}

/// 8-bit RGBA PNG. Pixel `(0, 0)` of the image is `bounds().min` of the canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl RasterEncoder for PngEncoder {
    fn encode(&self, canvas: &Canvas, out: &mut dyn Write) -> ImageResult<()> {
        png::PngEncoder::new(out).write_image(
            &canvas.to_rgba_bytes(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgba8,
        )
    }
}

/// Encode `canvas` as PNG into memory.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder.encode(canvas, &mut buf)?;
    Ok(buf)
}

/// Create `path` and write `canvas` into it with `encoder`.
pub fn save<E>(canvas: &Canvas, path: impl AsRef<Path>, encoder: &E) -> Result<()>
where
    E: RasterEncoder + ?Sized,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::CreateError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    let written = encoder
        .encode(canvas, &mut out)
        .and_then(|_| out.flush().map_err(ImageError::IoError));

    // Close the handle before any cleanup.
    drop(out);

    if let Err(source) = written {
        if let Err(e) = fs::remove_file(path) {
            warn!(
                "could not remove partially written {}: {}",
                path.display(),
                e
            );
        }
        return Err(Error::SaveError {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        "saved {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}

impl Canvas {
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path, &PngEncoder)
    }
}
