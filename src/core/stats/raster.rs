//! Class raster decoding
//!
//! Reads band 1 of the first image of an integer GeoTIFF. Georeferencing
//! tags are not needed for counting and are ignored.

use crate::core::stats::histogram::ClassHistogram;
use crate::domain::{MapExportError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};

/// Counts pixels per class in the raster at `path`
///
/// Only band 1 is counted. Pixels equal to `nodata` are skipped, as are
/// negative values in signed rasters.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, or if it holds
/// floating-point samples.
pub fn read_class_histogram(path: impl AsRef<Path>, nodata: u64) -> Result<ClassHistogram> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MapExportError::Io(format!("Failed to open raster {}: {}", path.display(), e))
    })?;

    let mut decoder = Decoder::new(BufReader::new(file))?.with_limits(Limits::unlimited());
    let (width, height) = decoder.dimensions()?;
    let pixels = width as usize * height as usize;

    let image = decoder.read_image()?;
    let stride = samples_per_pixel(path, image_len(&image), pixels)?;

    let histogram = match image {
        DecodingResult::U8(data) => count(first_band(data, stride).map(u64::from), nodata),
        DecodingResult::U16(data) => count(first_band(data, stride).map(u64::from), nodata),
        DecodingResult::U32(data) => count(first_band(data, stride).map(u64::from), nodata),
        DecodingResult::U64(data) => count(first_band(data, stride), nodata),
        DecodingResult::I8(data) => count_signed(first_band(data, stride).map(i64::from), nodata),
        DecodingResult::I16(data) => {
            count_signed(first_band(data, stride).map(i64::from), nodata)
        }
        DecodingResult::I32(data) => {
            count_signed(first_band(data, stride).map(i64::from), nodata)
        }
        DecodingResult::I64(data) => count_signed(first_band(data, stride), nodata),
        _ => {
            return Err(MapExportError::Raster(format!(
                "{} holds floating-point samples, expected integer class codes",
                path.display()
            )))
        }
    };

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        bands = stride,
        valid_pixels = histogram.total(),
        classes = histogram.class_count(),
        "Counted raster classes"
    );

    Ok(histogram)
}

fn image_len(image: &DecodingResult) -> usize {
    match image {
        DecodingResult::U8(d) => d.len(),
        DecodingResult::U16(d) => d.len(),
        DecodingResult::U32(d) => d.len(),
        DecodingResult::U64(d) => d.len(),
        DecodingResult::I8(d) => d.len(),
        DecodingResult::I16(d) => d.len(),
        DecodingResult::I32(d) => d.len(),
        DecodingResult::I64(d) => d.len(),
        DecodingResult::F32(d) => d.len(),
        DecodingResult::F64(d) => d.len(),
        _ => 0,
    }
}

/// Interleaved samples per pixel
fn samples_per_pixel(path: &Path, samples: usize, pixels: usize) -> Result<usize> {
    if pixels == 0 || samples == 0 || samples % pixels != 0 {
        return Err(MapExportError::Raster(format!(
            "{} holds {} samples for {} pixels",
            path.display(),
            samples,
            pixels
        )));
    }
    Ok(samples / pixels)
}

fn first_band<T>(data: Vec<T>, stride: usize) -> impl Iterator<Item = T> {
    data.into_iter().step_by(stride)
}

fn count(values: impl IntoIterator<Item = u64>, nodata: u64) -> ClassHistogram {
    ClassHistogram::from_values(values, nodata)
}

fn count_signed(values: impl IntoIterator<Item = i64>, nodata: u64) -> ClassHistogram {
    ClassHistogram::from_values(
        values.into_iter().filter_map(|v| u64::try_from(v).ok()),
        nodata,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tiff::encoder::{colortype, TiffEncoder};

    #[test]
    fn test_read_gray8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classificacao_1985.tif");
        let data: Vec<u8> = vec![0, 3, 3, 15, 15, 15, 0, 0, 3];
        let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
        encoder
            .write_image::<colortype::Gray8>(3, 3, &data)
            .unwrap();

        let histogram = read_class_histogram(&path, 0).unwrap();
        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.pixels(3), 3);
        assert_eq!(histogram.pixels(15), 3);
    }

    #[test]
    fn test_read_gray16() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classificacao_1986.tif");
        let data: Vec<u16> = vec![300, 300, 0, 41];
        let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
        encoder
            .write_image::<colortype::Gray16>(2, 2, &data)
            .unwrap();

        let histogram = read_class_histogram(&path, 0).unwrap();
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.pixels(300), 2);
    }

    #[test]
    fn test_read_rgb_counts_first_band_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classificacao_1987.tif");
        let data: Vec<u8> = vec![3, 200, 7, 3, 200, 9];
        let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
        encoder
            .write_image::<colortype::RGB8>(2, 1, &data)
            .unwrap();

        let histogram = read_class_histogram(&path, 0).unwrap();
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.class_count(), 1);
        assert_eq!(histogram.pixels(3), 2);
        assert_eq!(histogram.pixels(200), 0);
    }

    #[test]
    fn test_float_raster_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("float.tif");
        let data: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
        let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
        encoder
            .write_image::<colortype::Gray32Float>(2, 2, &data)
            .unwrap();

        assert!(matches!(
            read_class_histogram(&path, 0),
            Err(MapExportError::Raster(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_class_histogram("/nonexistent/classificacao_1985.tif", 0),
            Err(MapExportError::Io(_))
        ));
    }

    #[test]
    fn test_not_a_tiff() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.tif");
        std::fs::write(&path, b"definitely not a tiff").unwrap();

        assert!(read_class_histogram(&path, 0).is_err());
    }
}
