use image::{DynamicImage, ImageBuffer, Luma};
use iced::widget::image::Handle;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// Bytes needed to recognise every format the `image` crate sniffs.
pub const SNIFF_LEN: usize = 64;

pub struct PreviewPipeline;

/// Decoded preview of a staged file.
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl PreviewPipeline {
    /// Identifies the MIME type from the leading bytes, ignoring any extension.
    pub fn sniff_mime(header: &[u8]) -> &'static str {
        match image::guess_format(header) {
            Ok(format) => format.to_mime_type(),
            Err(_) => UNKNOWN_MIME,
        }
    }

    pub fn render(bytes: &[u8]) -> Result<Preview, String> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|err| format!("Failed to decode image data: {err}"))?;
        let (width, height) = (decoded.width(), decoded.height());

        if width == 0 || height == 0 {
            return Err(format!("Image has no pixels ({width}x{height})"));
        }

        let rgba = match decoded {
            DynamicImage::ImageLuma16(buffer) => Self::wide_monochrome_to_rgba(&buffer),
            other => other.into_rgba8().into_raw(),
        };

        Ok(Preview {
            handle: Handle::from_rgba(width, height, rgba),
            width,
            height,
        })
    }

    /// Scanner exports often store 16-bit grey values in a narrow band, so the
    /// preview is windowed to the observed min/max.
    fn wide_monochrome_to_rgba(buffer: &ImageBuffer<Luma<u16>, Vec<u16>>) -> Vec<u8> {
        let samples = buffer.as_raw();
        let (min, max) = min_max_u16(samples).unwrap_or((0, 0));
        let mut rgba = Vec::with_capacity(samples.len() * 4);
        for &value in samples {
            let gray = normalize_u16(value, min, max);
            rgba.extend_from_slice(&[gray, gray, gray, 255]);
        }
        rgba
    }
}

fn min_max_u16(values: &[u16]) -> Option<(u16, u16)> {
    values.iter().copied().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn normalize_u16(value: u16, min: u16, max: u16) -> u8 {
    if max <= min {
        return 0;
    }

    let range = (max - min) as f32;
    let normalized = (value.saturating_sub(min)) as f32 / range;
    (normalized * 255.0).clamp(0.0, 255.0).round() as u8
}
