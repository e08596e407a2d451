pub use self::array::{
    apply_function, cos, equal_size, exp, log, sin, sqrt, square, tan, Array2D, Iter, ShapeError,
};
pub use self::counter::SharedCounter;
pub use self::format::{read_array, write_array, ArrayFormatError};
pub use self::text_file::{Mode, TextFile, TextFileError};
pub use self::value::{Element, Real};
pub use self::vector::{cross_product, inner_product, TinyVector};

mod array;
mod counter;
mod format;
mod text_file;
mod value;
mod vector;
