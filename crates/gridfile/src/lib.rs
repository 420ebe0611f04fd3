//! Dense 2D grid files.
//!
//! A grid file is a fixed little-endian layout:
//!
//! | Offset | Size              | Contents                       |
//! |--------|-------------------|--------------------------------|
//! | 0      | 4                 | `width` as `i32`               |
//! | 4      | 4                 | `height` as `i32`              |
//! | 8      | `8 * w * h`       | `f64` values, row-major        |
//!
//! [`load`] reads a file into a [`Grid`]; [`save`] writes one back out.

pub mod error;
pub mod grid;
pub mod reader;
pub mod writer;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use reader::{load, parse, HEADER_LEN, VALUE_LEN};
pub use writer::{encode, save};
