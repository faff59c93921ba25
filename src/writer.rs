use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{config::GeneratorConfig, error::IconError, icon_data};

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Outcome of a successful run: the files written, in size-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub bytes_per_file: usize,
}

#[derive(Debug, Clone)]
pub struct IconWriter {
    config: GeneratorConfig,
    image: Vec<u8>,
}

impl IconWriter {
    /// Rejects configs that would not yield one distinct file per size.
    pub fn new(config: GeneratorConfig, image: Vec<u8>) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config, image })
    }

    /// Writer for the embedded placeholder image.
    pub fn from_config(config: GeneratorConfig) -> Result<Self, IconError> {
        let image = icon_data::decode_placeholder()?;
        Self::new(config, image)
    }

    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.config.output_dir.join(icon_file_name(size))
    }

    pub fn generate(&self) -> Result<GenerationReport, IconError> {
        self.generate_with(|path| info!("Wrote {}", path.display()))
    }

    /// Writes every icon in order, calling `notify` after each file is closed.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    pub fn generate_with<F>(&self, mut notify: F) -> Result<GenerationReport, IconError>
    where
        F: FnMut(&Path),
    {
        self.ensure_output_dir()?;

        let mut report = GenerationReport {
            written: Vec::with_capacity(self.config.sizes.len()),
            bytes_per_file: self.image.len(),
        };

        for &size in &self.config.sizes {
            let path = self.icon_path(size);
            write_icon(&path, &self.image)?;
            notify(&path);
            report.written.push(path);
        }

        Ok(report)
    }

    fn ensure_output_dir(&self) -> Result<(), IconError> {
        let dir = &self.config.output_dir;
        if !dir.is_dir() {
            debug!("Creating output directory {}", dir.display());
        }
        fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
            path: dir.clone(),
            source,
        })
    }
}

/// Truncates or creates `path` and writes `bytes` to it.
pub fn write_icon(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    let wrap = |source| IconError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(bytes).map_err(wrap)?;
    file.flush().map_err(wrap)
}

/// Writes the embedded placeholder for every size in `config`.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, IconError> {
    IconWriter::from_config(config.clone())?.generate()
}
