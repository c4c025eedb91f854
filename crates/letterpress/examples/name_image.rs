//! Compose a name from glyph directories.
//!
//! Usage:
//!
//! ```text
//! cargo run --example name_image -- <word> <output.png> <style_dir>...
//! ```
//!
//! Without arguments, two small style sets are generated in a temporary
//! directory and "HELLO" is written to `hello.png` in the current directory.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use letterpress::prelude::*;

/// Write a blocky glyph per letter, wrapped in a nested folder the way
/// extracted archives usually are.
fn write_demo_style(root: &Path, name: &str, color: Rgba<u8>) -> std::io::Result<PathBuf> {
    let style_root = root.join(name);
    let glyph_dir = style_root.join("letters");
    std::fs::create_dir_all(&glyph_dir)?;

    for (i, letter) in ('A'..='Z').enumerate() {
        let width = 40 + (i as u32 % 5) * 8;
        let glyph = RgbaImage::from_fn(width + 20, 120, |x, y| {
            let inked = (10..width + 10).contains(&x) && (10..110).contains(&y);
            let hollow = (22..width - 2).contains(&x) && (30..90).contains(&y);
            if inked && !hollow {
                color
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        glyph
            .save(glyph_dir.join(format!("{}.png", letter)))
            .map_err(std::io::Error::other)?;
    }

    Ok(style_root)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    letterpress::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ComposeConfig::new().height(200);

    if args.len() >= 3 {
        let path = generate_name_image(&args[0], &args[2..], &args[1], &config)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let temp = tempfile::tempdir()?;
    let styles = [
        write_demo_style(temp.path(), "ink", Rgba([20, 20, 20, 255]))?,
        write_demo_style(temp.path(), "rust", Rgba([183, 65, 14, 255]))?,
    ];

    let path = generate_name_image("Hello", &styles, "hello.png", &config)?;
    println!("Wrote {}", path.display());
    Ok(())
}
