//! # Output Module
//!
//! Turns the HDR frame buffer into something an image viewer can open:
//! - tone mapping and packing to interleaved 8-bit RGB
//! - JPEG / PNG export of the packed pixels
//! - EXR export of the linear frame buffer, untouched
//!
//! ## Tone Mapping
//!
//! A pixel whose brightest channel exceeds 1.0 is divided by that channel,
//! which keeps the hue and brings it into the unit range. Each channel is
//! then clamped to [0, 1] and mapped to `floor(255.99 * c)`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageBuffer, ImageFormat, Rgb};
use log::{debug, info};

use crate::camera::FrameBuffer;
use crate::error::{RenderError, Result};

/// Packed 8-bit RGB image. `into_raw()` yields `width * height * 3` bytes,
/// row-major, interleaved R, G, B.
pub type PixelBuffer = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// JPEG quality used for `.jpg` output.
pub const JPEG_QUALITY: u8 = 100;

/// File formats the encoders understand, picked from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Baseline JPEG from packed pixels.
    Jpeg,
    /// Lossless PNG from packed pixels.
    Png,
    /// Linear HDR, written from the frame buffer before tone mapping.
    Exr,
}

impl OutputFormat {
    /// Pick the format from the (case-insensitive) file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "exr" => Ok(Self::Exr),
            _ => Err(RenderError::UnsupportedFormat(extension)),
        }
    }
}

/// Tone-map one linear color into an 8-bit triple.
pub fn tone_map(color: [f32; 3]) -> [u8; 3] {
    let max = color[0].max(color[1]).max(color[2]);
    let scale = if max > 1.0 { max } else { 1.0 };
    color.map(|channel| {
        let normalized = (channel / scale).clamp(0.0, 1.0);
        (255.99 * normalized) as u8
    })
}

/// Tone-map every pixel of the frame buffer into a freshly allocated pixel buffer.
pub fn pack_pixels(frame: &FrameBuffer) -> PixelBuffer {
    let rescaled = frame
        .pixels()
        .filter(|pixel| pixel.0.iter().any(|&channel| channel > 1.0))
        .count();
    debug!(
        "Packing {}x{} frame, {} pixels rescaled into unit range",
        frame.width(),
        frame.height(),
        rescaled
    );

    PixelBuffer::from_fn(frame.width(), frame.height(), |x, y| Rgb(tone_map(frame.get_pixel(x, y).0)))
}

/// Encode packed pixels to `path`. The buffer is consumed; it is never touched
/// again after handoff.
pub fn save_pixels(pixels: PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match OutputFormat::from_path(path)? {
        OutputFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(path)?);
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(&pixels)?;
            // BufWriter drops write errors on drop; surface them here.
            writer.flush()?;
        }
        OutputFormat::Png => pixels.save_with_format(path, ImageFormat::Png)?,
        OutputFormat::Exr => {
            return Err(RenderError::UnsupportedFormat(
                "exr (packed pixels are 8-bit; write the frame buffer instead)".to_string(),
            ))
        }
    }
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save the linear frame buffer as EXR with full float precision.
pub fn save_frame_as_exr(frame: &FrameBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_rgb_file(path, frame.width() as usize, frame.height() as usize, |x, y| {
        let pixel = frame.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    })?;
    info!("HDR image saved as EXR: {}", path.display());
    Ok(())
}

/// Write the frame to `path`, tone-mapping first unless the target is EXR.
pub fn save_frame(frame: &FrameBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match OutputFormat::from_path(path)? {
        OutputFormat::Exr => save_frame_as_exr(frame, path),
        OutputFormat::Jpeg | OutputFormat::Png => save_pixels(pack_pixels(frame), path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn overbright_colors_keep_their_ratios() {
        assert_eq!(tone_map([2.0, 1.0, 0.0]), [255, 127, 0]);
        assert_eq!(tone_map([4.0, 4.0, 1.0]), [255, 255, 63]);
    }

    #[test]
    fn in_range_colors_are_not_rescaled() {
        assert_eq!(tone_map([1.0, 0.5, 0.0]), [255, 127, 0]);
        assert_eq!(tone_map([0.90, 0.89, 0.89]), [230, 227, 227]);
        assert_eq!(tone_map([0.0, 0.0, 0.0]), [0, 0, 0]);
    }

    #[test]
    fn negative_channels_clamp_to_zero() {
        assert_eq!(tone_map([-0.5, 0.5, -3.0]), [0, 127, 0]);
    }

    #[test]
    fn packed_layout_is_row_major_interleaved() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.put_pixel(1, 0, Rgb([1.0, 0.0, 0.0]));
        frame.put_pixel(0, 1, Rgb([0.0, 0.0, 2.0]));

        let raw = pack_pixels(&frame).into_raw();
        assert_eq!(raw.len(), 3 * 2 * 3);
        assert_eq!(&raw[3..6], &[255, 0, 0]);
        assert_eq!(&raw[9..12], &[0, 0, 255]);
        assert!(raw[..3].iter().chain(&raw[6..9]).all(|&b| b == 0));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(&PathBuf::from("a.JPG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("a.jpeg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("dir/a.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("a.exr")).unwrap(), OutputFormat::Exr);
        assert!(matches!(
            OutputFormat::from_path(&PathBuf::from("a.bmp")),
            Err(RenderError::UnsupportedFormat(ext)) if ext == "bmp"
        ));
        assert!(OutputFormat::from_path(&PathBuf::from("noext")).is_err());
    }

    #[test]
    fn writes_png_and_exr_to_disk() {
        let dir = std::env::temp_dir().join(format!("glint-output-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let frame = FrameBuffer::from_fn(4, 3, |x, y| Rgb([x as f32 / 3.0, y as f32 / 2.0, 2.0]));

        let png = dir.join("frame.png");
        save_frame(&frame, &png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.as_raw(), pack_pixels(&frame).as_raw());

        let jpg = dir.join("frame.jpg");
        save_frame(&frame, &jpg).unwrap();
        let decoded = image::open(&jpg).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));

        let exr = dir.join("frame.exr");
        save_frame(&frame, &exr).unwrap();
        assert!(std::fs::metadata(&exr).unwrap().len() > 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn jpeg_write_failure_is_reported() {
        let dir = std::env::temp_dir().join(format!("glint-full-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let target = dir.join("full.jpg");
        let _ = std::fs::remove_file(&target);
        std::os::unix::fs::symlink("/dev/full", &target).unwrap();

        let result = save_pixels(PixelBuffer::new(8, 8), &target);
        assert!(matches!(result, Err(RenderError::Io(_))), "{result:?}");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
