//! Tests for image decoding, loading and export

#[cfg(test)]
mod tests {
    use bilateral_search::SearchError;
    use bilateral_search::imaging::raster::{ImageSampler, Raster};
    use bilateral_search::io::image::{decode_raster, export_raster, load_raster};
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn sample() -> Raster {
        Raster::from_pixels(
            2,
            2,
            vec![
                [255, 0, 0, 255],
                [0, 255, 0, 255],
                [0, 0, 255, 255],
                [10, 20, 30, 255],
            ],
        )
        .expect("consistent size")
    }

    // Tests exported PNGs load back unchanged
    // Verified by swapping channels during export
    #[test]
    fn test_export_then_load_png() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("sample.png");

        export_raster(&sample(), &path).expect("export");
        let loaded = load_raster(&path).expect("load");

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("sample.png");

        export_raster(&sample(), &path).expect("export");

        assert!(path.exists());
    }

    #[test]
    fn test_export_unknown_extension_fails() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("sample.unknown");

        let result = export_raster(&sample(), &path);

        assert!(matches!(result, Err(SearchError::ImageExport { .. })));
    }

    // Tests 16-bit TIFF data is decoded and narrowed to 8 bits
    // Verified by decoding through the 8-bit conversion path
    #[test]
    fn test_decode_sixteen_bit_tiff() {
        let wide: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(3, 2, Rgba([0x8001, 0x40ff, 0x0100, 0xffff]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba16(wide)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Tiff)
            .expect("encode tiff");

        let raster = decode_raster(&bytes).expect("decode");

        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.pixel(2, 1), Some([0x80, 0x40, 0x01, 0xff]));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("temp dir");

        let result = load_raster(dir.path().join("absent.tif"));

        assert!(matches!(
            result,
            Err(SearchError::FileSystem {
                operation: "read image",
                ..
            })
        ));
    }

    #[test]
    fn test_load_undecodable_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("garbage.tif");
        fs::write(&path, b"definitely not an image").expect("write");

        let result = load_raster(&path);

        assert!(matches!(result, Err(SearchError::ImageLoad { .. })));
    }
}
