pub mod dispatcher;
pub mod external_tool;
pub mod image_loader;
pub mod registry;

pub use dispatcher::{format_palette, Dispatcher};
pub use external_tool::{find_program, parse_hex_lines, ToolCommand};
pub use image_loader::load_pixels;
pub use registry::{Backend, Registry};
