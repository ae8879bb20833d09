//! ImageMagick-based backend
//!
//! Asks ImageMagick for a reduced, de-duplicated color table of the first
//! frame (`txt:-` output, one pixel per line after a header). When the
//! reduction returns fewer than 16 colors the request is repeated with a
//! larger `-colors` value.

use std::ffi::OsString;
use std::path::Path;

use wal_palette::{Palette, PaletteError, Rgb, PALETTE_SIZE};

use crate::error::BackendError;
use crate::models::{AppConfig, BackendKind};
use crate::services::{find_program, parse_hex_lines, Backend, ToolCommand};

const TOOL_NAME: &str = "Imagemagick";

/// Mixed into the foreground slots of dark palettes
const FOREGROUND_TINT: Rgb = Rgb::new(0xee, 0xee, 0xee);

/// Palette from ImageMagick's color reduction
pub struct WalBackend {
    command: Option<Vec<String>>,
    attempts: u32,
}

impl WalBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            command: config.magick_command.clone(),
            attempts: config.wal_attempts,
        }
    }

    /// Configured command, else `magick convert`, else `convert`
    fn resolve_command(&self) -> Result<ToolCommand, BackendError> {
        let command = match &self.command {
            Some(parts) => ToolCommand::from_parts(parts),
            None => find_program("magick")
                .map(|path| ToolCommand::new(path).prefix_arg("convert"))
                .or_else(|| find_program("convert").map(ToolCommand::new)),
        };
        command.ok_or_else(|| BackendError::ToolNotFound(TOOL_NAME.to_string()))
    }

    fn extract(&self, command: &ToolCommand, image: &Path) -> Result<Vec<Rgb>, BackendError> {
        let mut input = OsString::from(image.as_os_str());
        input.push("[0]");

        let mut found = 0;
        for attempt in 0..self.attempts {
            let count = PALETTE_SIZE + attempt as usize;
            let args: [OsString; 7] = [
                input.clone(),
                "-resize".into(),
                "25%".into(),
                "-colors".into(),
                count.to_string().into(),
                "-unique-colors".into(),
                "txt:-".into(),
            ];
            let output = command.run(&args)?;

            // First line is the txt: header
            let colors = parse_hex_lines(output.lines().skip(1));
            tracing::debug!(requested = count, found = colors.len(), "ImageMagick colors");
            if colors.len() >= PALETTE_SIZE {
                return Ok(colors);
            }

            found = colors.len();
            tracing::warn!(
                found,
                next = count + 1,
                "Imagemagick couldn't generate a palette, trying a larger palette size"
            );
        }

        Err(BackendError::InsufficientColors {
            backend: BackendKind::Wal,
            found,
            needed: PALETTE_SIZE,
        })
    }
}

impl Backend for WalBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Wal
    }

    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError> {
        let command = self.resolve_command()?;
        let colors = self.extract(&command, image)?;
        Ok(adjust(&colors, light)?)
    }
}

/// Build the palette from the darkest color plus the upper half of the
/// color table. Only the first 16 colors are used.
pub fn adjust(colors: &[Rgb], light: bool) -> Result<Palette, PaletteError> {
    let Some(colors) = colors.get(..PALETTE_SIZE) else {
        return Err(PaletteError::WrongLength {
            expected: PALETTE_SIZE,
            actual: colors.len(),
        });
    };
    let first = colors[0];
    let last = colors[PALETTE_SIZE - 1];

    let mut raw = Vec::with_capacity(PALETTE_SIZE);
    raw.push(first);
    raw.extend_from_slice(&colors[8..16]);
    raw.extend_from_slice(&colors[8..15]);

    if light {
        raw[0] = last.lighten(0.85);
        raw[7] = first;
        raw[8] = last.darken(0.4);
        raw[15] = first;
    } else {
        if raw[0].r >= 0x10 {
            raw[0] = raw[0].darken(0.4);
        }
        raw[7] = raw[7].blend(FOREGROUND_TINT);
        raw[8] = raw[7].darken(0.3);
        raw[15] = raw[15].blend(FOREGROUND_TINT);
    }

    Palette::new(raw)
}
