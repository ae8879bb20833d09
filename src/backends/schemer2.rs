use std::ffi::OsStr;
use std::path::Path;

use wal_palette::{generic_adjust, sort_by_yiq, Palette, PaletteError, Rgb, PALETTE_SIZE};

use crate::error::BackendError;
use crate::models::{AppConfig, BackendKind};
use crate::services::{find_program, parse_hex_lines, Backend, ToolCommand};

const PROGRAM: &str = "schemer2";

/// Palette from the external `schemer2` program
pub struct Schemer2Backend {
    command: Option<Vec<String>>,
}

impl Schemer2Backend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            command: config.schemer2_command.clone(),
        }
    }

    fn resolve_command(&self) -> Result<ToolCommand, BackendError> {
        let command = match &self.command {
            Some(parts) => ToolCommand::from_parts(parts),
            None => find_program(PROGRAM).map(ToolCommand::new),
        };
        command.ok_or_else(|| BackendError::ToolNotFound(PROGRAM.to_string()))
    }
}

impl Backend for Schemer2Backend {
    fn kind(&self) -> BackendKind {
        BackendKind::Schemer2
    }

    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError> {
        let command = self.resolve_command()?;
        let output = command.run([
            OsStr::new("-format"),
            OsStr::new("img::colors"),
            OsStr::new("-minBright"),
            OsStr::new("75"),
            OsStr::new("-in"),
            image.as_os_str(),
        ])?;

        let colors = parse_hex_lines(output.lines());
        tracing::debug!(found = colors.len(), "schemer2 colors");
        if colors.len() < PALETTE_SIZE {
            return Err(BackendError::InsufficientColors {
                backend: BackendKind::Schemer2,
                found: colors.len(),
                needed: PALETTE_SIZE,
            });
        }

        Ok(adjust(colors, light)?)
    }
}

/// Keep the eight lightest of the first sixteen colors (by YIQ) and repeat
/// them to fill the palette.
pub fn adjust(mut colors: Vec<Rgb>, light: bool) -> Result<Palette, PaletteError> {
    if colors.len() < PALETTE_SIZE {
        return Err(PaletteError::WrongLength {
            expected: PALETTE_SIZE,
            actual: colors.len(),
        });
    }
    colors.truncate(PALETTE_SIZE);
    sort_by_yiq(&mut colors);

    let upper = &colors[8..PALETTE_SIZE];
    let raw: Vec<Rgb> = upper.iter().chain(upper.iter()).copied().collect();
    generic_adjust(raw, light)
}
