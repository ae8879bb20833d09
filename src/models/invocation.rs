use std::ffi::OsStr;
use std::path::PathBuf;

use crate::error::DispatchError;
use crate::models::BackendKind;

/// The only light-mode flag value that enables light mode.
pub const LIGHT_FLAG_ON: &str = "1";

/// One parsed request: which backend, which image, which theme variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub backend: BackendKind,
    pub image: PathBuf,
    pub light: bool,
}

impl Invocation {
    /// Parse positional arguments `BACKEND IMAGE [LIGHT] [...]`.
    ///
    /// Returns `Ok(None)` for an empty argument list. The backend name is
    /// resolved before the image argument is checked, so an unknown name is
    /// reported even when the path is also missing. Arguments past the third
    /// are ignored. Arguments are taken as raw OS strings: the image path
    /// need not be UTF-8, and a non-UTF-8 flag counts as "not 1".
    pub fn parse<S: AsRef<OsStr>>(args: &[S]) -> Result<Option<Self>, DispatchError> {
        let Some(name) = args.first() else {
            return Ok(None);
        };
        let name = name.as_ref();
        let backend: BackendKind = name
            .to_str()
            .ok_or_else(|| DispatchError::UnknownBackend(name.to_string_lossy().into_owned()))?
            .parse()?;

        let image = args
            .get(1)
            .map(|path| PathBuf::from(path.as_ref()))
            .ok_or(DispatchError::MissingArgument("image"))?;

        let light = parse_light_flag(args.get(2).and_then(|flag| flag.as_ref().to_str()));

        Ok(Some(Self {
            backend,
            image,
            light,
        }))
    }
}

/// `true` only for the literal `"1"`; anything else, including absence, is
/// `false`.
pub fn parse_light_flag(value: Option<&str>) -> bool {
    value == Some(LIGHT_FLAG_ON)
}
