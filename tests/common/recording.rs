//! Backends that record how they were called.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use wal_palette::{Palette, Rgb};
use walcolors::error::BackendError;
use walcolors::models::BackendKind;
use walcolors::services::{Backend, Dispatcher, Registry};

/// One recorded `generate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub backend: BackendKind,
    pub image: PathBuf,
    pub light: bool,
}

/// Returns a fixed palette per backend and records every call
pub struct RecordingBackend {
    kind: BackendKind,
    calls: Calls,
}

impl Backend for RecordingBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn generate(&self, image: &Path, light: bool) -> Result<Palette, BackendError> {
        self.calls.lock().unwrap().push(Call {
            backend: self.kind,
            image: image.to_path_buf(),
            light,
        });
        Ok(palette_for(self.kind, light))
    }
}

/// Distinct palette for every backend/flag pair
pub fn palette_for(kind: BackendKind, light: bool) -> Palette {
    let tag = kind as u8 * 2 + u8::from(light);
    let colors = (0..16u8).map(|i| Rgb::new(tag, i, 0xaa)).collect();
    Palette::new(colors).unwrap()
}

pub type Calls = Arc<Mutex<Vec<Call>>>;

/// Dispatcher with a recording backend in every registry slot
pub fn recording_dispatcher() -> (Dispatcher, Calls) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let registry = BackendKind::ALL
        .into_iter()
        .fold(Registry::default(), |registry, kind| {
            registry.with_backend(Box::new(RecordingBackend {
                kind,
                calls: Arc::clone(&calls),
            }))
        });
    (Dispatcher::new(registry), calls)
}

/// Snapshot of the calls recorded so far
pub fn recorded(calls: &Calls) -> Vec<Call> {
    calls.lock().unwrap().clone()
}
