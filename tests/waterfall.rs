use std::path::PathBuf;

use freqpicker::data::waterfall::*;
use image::{Rgba, RgbaImage};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("freqpicker-{}-{}", std::process::id(), name))
}

#[test]
fn opens_png_and_converts_to_color_image() {
    let path = temp_path("waterfall.png");
    let mut img = RgbaImage::new(8, 4);
    img.put_pixel(3, 2, Rgba([255, 0, 0, 255]));
    img.save(&path).unwrap();

    let wf = WaterfallImage::open(&path).unwrap();
    assert_eq!((wf.width(), wf.height()), (8, 4));
    assert!(wf.display_name().ends_with("waterfall.png"));

    let color = wf.to_color_image();
    assert_eq!(color.size, [8, 4]);
    assert_eq!(color.pixels[2 * 8 + 3], egui::Color32::from_rgb(255, 0, 0));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = WaterfallImage::open("capture.tiff").unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn corrupt_file_reports_decode_error() {
    let path = temp_path("corrupt.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();
    let err = WaterfallImage::open(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
    assert!(err.to_string().contains("Failed to load image"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(is_supported(std::path::Path::new("a.PNG")));
    assert!(is_supported(std::path::Path::new("a.JpEg")));
    assert!(is_supported(std::path::Path::new("dir/a.bmp")));
    assert!(!is_supported(std::path::Path::new("a.gif")));
    assert!(!is_supported(std::path::Path::new("noext")));
}
