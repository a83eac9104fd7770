//! A builder that reads training data from disk.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::Error;

use super::sample_struct::Sample;

/// Reads a comma-separated file into a [`Sample`].
///
/// ```no_run
/// use minilearners::SampleReader;
///
/// let sample = SampleReader::default()
///     .file("fish.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
/// Without [`SampleReader::target_feature`],
/// the last column becomes the class label.
#[derive(Default)]
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}

impl<P, S> SampleReader<P, S> {
    /// Set the file to read.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Tell the reader whether the first line names the columns.
    /// Without a header, columns are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the column holding the class labels.
    pub fn target_feature(mut self, target: S) -> Self {
        self.target = Some(target);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Read the file into a labeled [`Sample`].
    ///
    /// # Errors
    /// [`Error::Io`] when opening or reading fails, the shape violations
    /// of [`Sample::from_reader`], and [`Error::UnknownFeature`] when the
    /// requested target column does not exist.
    ///
    /// # Panics
    /// Panics when no file was set.
    pub fn read(self) -> Result<Sample, Error> {
        let Self { file, has_header, target } = self;
        let file = match file {
            Some(file) => file,
            None => { panic!("The file name is not set. Use `SampleReader::file`."); },
        };

        let reader = BufReader::new(File::open(file)?);
        let sample = Sample::from_reader(reader, has_header)?;

        let target = match target {
            Some(target) => target.as_ref().to_string(),
            None => {
                sample.names()
                    .last()
                    .expect("a successfully read sample has at least one column")
                    .clone()
            },
        };
        sample.set_target(target)
    }
}
