use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use perfcmp_synth::config::GeneratorConfig;

use crate::model::dataset::Dataset;

/// Buffered destination of a command: the named file, or stdout when no path is given.
pub struct Output {
    label: String,
    writer: BufWriter<Box<dyn Write>>,
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let (label, sink): (_, Box<dyn Write>) = match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                (path.display().to_string(), Box::new(file))
            }
            None => ("stdout".to_owned(), Box::new(io::stdout().lock())),
        };
        Ok(Self {
            label,
            writer: BufWriter::new(sink),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs a text renderer against this output, naming the output on failure.
    pub fn render<F>(&mut self, what: &str, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        render(self).with_context(|| format!("Failed to write {what} to {}", self.label))
    }

    /// Writes `value` as pretty JSON followed by a newline, then finishes the output.
    pub fn write_json<T>(mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .with_context(|| format!("Failed to write JSON to {}", self.label))?;
        writeln!(self.writer)
            .with_context(|| format!("Failed to write JSON to {}", self.label))?;
        self.finish()
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", self.label))?;
        tracing::info!(output = %self.label, "output written");
        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Saves `value` as JSON to `path`, or to stdout when `path` is `None`.
pub fn save_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize + ?Sized,
{
    Output::create(path)?.write_json(value)
}

fn load_json<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {kind} file: {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {kind} file: {}", path.display()))?;
    tracing::debug!(kind, path = %path.display(), "loaded JSON file");
    Ok(value)
}

pub fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    load_json("generator config", path)
}

pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    load_json("dataset", path)
}
