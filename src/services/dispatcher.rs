use std::ffi::OsStr;

use wal_palette::Palette;

use crate::error::DispatchError;
use crate::models::Invocation;
use crate::services::Registry;

/// Resolves an invocation to a backend and runs it
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Run the selected backend and hand back its palette unchanged.
    ///
    /// Backend failures are wrapped with the backend name and nothing else.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<Palette, DispatchError> {
        tracing::debug!(
            backend = %invocation.backend,
            image = %invocation.image.display(),
            light = invocation.light,
            "Dispatching"
        );

        self.registry
            .get(invocation.backend)
            .generate(&invocation.image, invocation.light)
            .map_err(|source| DispatchError::Backend {
                backend: invocation.backend,
                source,
            })
    }

    /// Parse positional arguments and dispatch.
    ///
    /// Returns `Ok(None)` when no arguments were given.
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<Option<Palette>, DispatchError> {
        match Invocation::parse(args)? {
            Some(invocation) => self.dispatch(&invocation).map(Some),
            None => Ok(None),
        }
    }
}

/// Single-line JSON array of lowercase `#rrggbb` codes
pub fn format_palette(palette: &Palette) -> Result<String, serde_json::Error> {
    serde_json::to_string(&palette.to_hex_strings())
}
