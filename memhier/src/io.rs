use std::fs::File;
use std::io::BufRead;

use crate::error::SimError;

/// Opens a trace file for line-by-line reading
pub fn get_reader(file: File) -> Result<impl BufRead, SimError> {
    // Compatibility on other systems
    #[cfg(not(unix))]
    {
        use std::io::BufReader;
        const BUFFER_SIZE: usize = 64 * 4096;
        Ok(BufReader::with_capacity(BUFFER_SIZE, file))
    }
    // Memory map the file on unix systems, traces are read strictly front to back
    #[cfg(unix)]
    {
        use std::io::Cursor;
        use memmap2::{Advice, Mmap};
        let mmap = unsafe { Mmap::map(&file)? };
        mmap.advise(Advice::Sequential)?;
        Ok(Cursor::new(mmap))
    }
}
