use fake::Fake;
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const CARD_X: i32 = 100;
pub const CARD_Y: i32 = 400;
/// Boundary of [`card_screen_png`], card-relative:
/// top, bottom, left, right, visa left, visa top, top exclusion right, top exclusion bottom
pub const BOUNDARY: [i32; 8] = [30, 515, 60, 830, 530, 330, 160, 100];

fn encode(image: DynamicImage) -> Vec<u8> {
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("Failed to encode PNG");
    png
}

/// A 1080x1600 card customisation screen: dark page, grey card, dashed
/// white L-shaped boundary.
pub fn card_screen_png() -> Vec<u8> {
    let [top, bottom, left, right, visa_left, visa_top, excl_right, excl_bottom] = BOUNDARY;
    let mut screen = RgbImage::from_pixel(1080, 1600, Rgb([8, 8, 12]));
    for y in 0..560 {
        for x in 0..880 {
            screen.put_pixel((CARD_X + x) as u32, (CARD_Y + y) as u32, Rgb([60, 60, 70]));
        }
    }

    let mut dot = |x: i32, y: i32| {
        screen.put_pixel((CARD_X + x) as u32, (CARD_Y + y) as u32, Rgb([255, 255, 255]));
    };
    let horizontal = [
        (top, excl_right, right),
        (visa_top, visa_left, right),
        (bottom, left, visa_left),
        (excl_bottom, left, excl_right),
    ];
    for (y, x1, x2) in horizontal {
        for x in (x1..=x2).filter(|x| (x - x1) % 20 < 12) {
            for dy in -1..=1 {
                dot(x, y + dy);
            }
        }
    }
    let vertical = [
        (right, top, visa_top),
        (visa_left, visa_top, bottom),
        (left, excl_bottom, bottom),
        (excl_right, top, excl_bottom),
    ];
    for (x, y1, y2) in vertical {
        for y in (y1..=y2).filter(|y| (y - y1) % 20 < 12) {
            for dx in -1..=1 {
                dot(x + dx, y);
            }
        }
    }

    encode(DynamicImage::ImageRgb8(screen))
}

/// A screen with nothing on it.
pub fn blank_screen_png() -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(RgbImage::new(1080, 1600)))
}

/// Save a dark square on a light background of random size into `dir`.
pub fn write_square_image(dir: &Path) -> PathBuf {
    let width: u32 = (80..200).fake();
    let height: u32 = (80..200).fake();
    let mut image = GrayImage::from_pixel(width, height, Luma([255]));
    for y in height / 4..height * 3 / 4 {
        for x in width / 4..width * 3 / 4 {
            image.put_pixel(x, y, Luma([0]));
        }
    }

    let name = format!("{}.png", fake::faker::lorem::en::Word().fake::<String>());
    let path = dir.join(name);
    image.save(&path).expect("Failed to write square image");
    path
}
