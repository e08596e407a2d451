use std::path::Path;

use tracing::{debug, error};

use refmat::{read_array, write_array, Array2D, ArrayFormatError, Mode, TextFile};

pub fn load(path: &Path) -> Option<Array2D<f64>> {
    let result: Result<Array2D<f64>, ArrayFormatError> = TextFile::open(path, Mode::Read)
        .map_err(Into::into)
        .and_then(|mut file| read_array(&mut file));

    match result {
        Ok(array) => {
            debug!(
                path = %path.display(),
                rows = array.rows(),
                cols = array.cols(),
                "Loaded array."
            );
            Some(array)
        }
        Err(err) => {
            error!(error = %err, path = %path.display(), "Could not read array file.");
            None
        }
    }
}

pub fn save(path: &Path, array: &Array2D<f64>) -> bool {
    let result: Result<(), ArrayFormatError> = TextFile::open(path, Mode::Write)
        .map_err(Into::into)
        .and_then(|mut file| {
            write_array(&mut file, array)?;
            file.flush()?;
            Ok(())
        });

    match result {
        Ok(()) => {
            debug!(path = %path.display(), "Saved array.");
            true
        }
        Err(err) => {
            error!(error = %err, path = %path.display(), "Could not write array file.");
            false
        }
    }
}
