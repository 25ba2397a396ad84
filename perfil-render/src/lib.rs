//! Perfil Render Library
//!
//! Depth-scaled SVG rendering of well profiles: the column layouts, the
//! composite drawing, the print side panels and the fit-to-page assembler.

pub mod constructive;
pub mod error;
pub mod lithology;
pub mod panels;
pub mod patterns;
pub mod print;
pub mod profile;
pub mod scale;
pub mod svg;
pub mod voc;

// Re-export commonly used types and functions
pub use error::RenderError;
pub use print::{assemble, print_filename, Margins, Orientation, PageFormat, PageOptions, PrintDocument};
pub use profile::{ProfileDrawing, ProfileLayout, ProfileRenderer};
pub use svg::{SvgDocument, SvgFragment};

/// Version information for the perfil render library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
