/*! Line loading.

Decompresses a gzipped review dump and loads it as a sequence of trimmed lines.
Whitespace-only lines end up empty, which is what the record splitter looks for.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use log::{debug, info};

use crate::error::Error;

/// Reader that yields trimmed lines of a (possibly gzipped) text stream.
///
/// Invalid UTF-8 sequences are replaced rather than failing the whole run,
/// since review dumps are not consistently encoded.
#[derive(Debug)]
pub struct LineReader<T> {
    br: T,
    buf: Vec<u8>,
}

impl LineReader<BufReader<MultiGzDecoder<BufReader<File>>>> {
    /// Open a gzipped file.
    ///
    /// Fails if the file can't be opened. Invalid gzip content surfaces as an
    /// [Error::Io] on the first read.
    pub fn from_path_gzip(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        let gzd = MultiGzDecoder::new(BufReader::new(f));
        Ok(Self::new(BufReader::new(gzd)))
    }
}

impl<T: BufRead> LineReader<T> {
    /// Wrap an already decompressed stream.
    pub fn new(br: T) -> Self {
        Self {
            br,
            buf: Vec::new(),
        }
    }

    /// Get next line (read until `\n`)
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        self.buf.clear();
        match self.br.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Err(e) => Some(Err(Error::Io(e))),
            _ => Some(Ok(String::from_utf8_lossy(&self.buf).trim().to_owned())),
        }
    }
}

impl<T: BufRead> Iterator for LineReader<T> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

/// Load every line of the gzipped file at `src` in memory.
pub fn load_lines(src: &Path) -> Result<Vec<String>, Error> {
    info!("loading {:?}", src);
    let lines = LineReader::from_path_gzip(src)?.collect::<Result<Vec<_>, _>>()?;
    debug!("{:?}: {} lines", src, lines.len());
    Ok(lines)
}
