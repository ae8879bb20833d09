use std::path::Path;

use wal_palette::Palette;

use crate::backends::{
    ColorThiefBackend, ColorzBackend, HaishokuBackend, Schemer2Backend, WalBackend,
};
use crate::error::BackendError;
use crate::models::{AppConfig, BackendKind};

/// Trait for palette backends
pub trait Backend: Send + Sync {
    /// Registry slot this backend fills
    fn kind(&self) -> BackendKind;

    /// Generate a 16-color palette from the image at `image`
    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError>;
}

/// Fixed table with exactly one backend per [`BackendKind`]
pub struct Registry {
    backends: [Box<dyn Backend>; BackendKind::COUNT],
}

impl Registry {
    /// Registry with the built-in backends
    pub fn builtin(config: &AppConfig) -> Self {
        Self {
            backends: [
                Box::new(ColorThiefBackend::new(config)),
                Box::new(ColorzBackend::new(config)),
                Box::new(HaishokuBackend::new(config)),
                Box::new(Schemer2Backend::new(config)),
                Box::new(WalBackend::new(config)),
            ],
        }
    }

    /// Replace the backend in the slot named by `backend.kind()`
    pub fn with_backend(mut self, backend: Box<dyn Backend>) -> Self {
        let index = backend.kind().index();
        self.backends[index] = backend;
        self
    }

    /// Backend registered for `kind`
    pub fn get(&self, kind: BackendKind) -> &dyn Backend {
        self.backends[kind.index()].as_ref()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin(&AppConfig::default())
    }
}
