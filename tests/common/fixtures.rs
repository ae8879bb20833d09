//! Test fixtures: scratch images and stub tools.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Write a PNG whose red and green channels sweep across the image, so
/// every quantizer finds plenty of distinct colors.
pub fn gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    write_gradient(&path, width, height);
    path
}

/// Write the gradient image to an exact path, e.g. one that is not UTF-8
pub fn write_gradient(path: &Path, width: u32, height: u32) {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
            255,
        ])
    });
    image
        .save_with_format(path, image::ImageFormat::Png)
        .expect("Failed to write gradient image");
}

/// Write a single-color PNG
pub fn flat_png(dir: &Path, name: &str, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(16, 16, Rgba([color[0], color[1], color[2], 255]))
        .save(&path)
        .expect("Failed to write flat image");
    path
}

/// Write a shell script and return a command prefix that runs it with `sh`.
///
/// Going through `sh` avoids needing the executable bit on the file.
pub fn stub_tool(dir: &Path, name: &str, body: &str) -> Vec<String> {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub tool");
    vec!["sh".to_string(), path.to_string_lossy().into_owned()]
}

/// Sixteen distinct colors, darkest first
pub fn ramp() -> Vec<String> {
    (0..16u32)
        .map(|i| format!("#{:02X}{:02X}{:02X}", i * 16, i * 12, i * 8))
        .collect()
}

/// Script body that prints `lines` and then exits
pub fn print_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("echo '{line}'"))
        .collect::<Vec<_>>()
        .join("\n")
}
