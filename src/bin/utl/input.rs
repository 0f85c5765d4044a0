//! Reading and checking input documents.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use utl::document::{
    check_yaml, json_from_bytes, json_to_bytes, load_json_gzip, load_text, yaml_from_bytes,
};
use utl::value::Value;

/// How an input is decoded, from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Json,
    JsonGzip,
    Yaml,
}

impl InputKind {
    /// `.json` → JSON, `.gz` → gzipped JSON, anything else YAML.
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".gz") {
            InputKind::JsonGzip
        } else if name.ends_with(".json") {
            InputKind::Json
        } else {
            InputKind::Yaml
        }
    }
}

/// A checked input document.
pub struct Loaded {
    /// Display name (`-` for stdin)
    pub name: String,
    pub kind: InputKind,
    /// Printable source text. Gzipped inputs hold the decompressed document,
    /// re-encoded with the requested indent.
    pub source: Vec<u8>,
}

impl Loaded {
    /// Decode the source into a value.
    pub fn value(&self) -> Result<Value> {
        let value = match self.kind {
            InputKind::Json | InputKind::JsonGzip => json_from_bytes(&self.source),
            InputKind::Yaml => yaml_from_bytes(&self.source),
        };
        value.with_context(|| format!("failed to decode {}", self.name))
    }
}

/// Turn the positional file list into inputs; none means stdin.
pub fn paths_or_stdin(files: &[PathBuf]) -> Vec<Option<&Path>> {
    if files.is_empty() {
        return vec![None];
    }
    files
        .iter()
        .map(|p| (p.as_os_str() != "-").then_some(p.as_path()))
        .collect()
}

/// Load and strictly check one input. `None` reads stdin as YAML.
pub fn load(path: Option<&Path>, indent: usize) -> Result<Loaded> {
    let Some(path) = path else {
        let mut source = Vec::new();
        std::io::stdin()
            .read_to_end(&mut source)
            .context("failed to read stdin")?;
        check_yaml(&source).context("failed to parse stdin")?;
        return Ok(Loaded {
            name: "-".to_string(),
            kind: InputKind::Yaml,
            source,
        });
    };

    let name = path.display().to_string();
    let kind = InputKind::detect(path);
    log::info!("loading {} as {:?}", name, kind);
    let source = match kind {
        InputKind::JsonGzip => {
            let value = load_json_gzip(path)?;
            json_to_bytes(&value, indent)?
        }
        InputKind::Json => {
            let source = load_text(path)?;
            json_from_bytes(&source).with_context(|| format!("failed to parse {}", name))?;
            source
        }
        InputKind::Yaml => {
            let source = load_text(path)?;
            check_yaml(&source).with_context(|| format!("failed to parse {}", name))?;
            source
        }
    };
    Ok(Loaded { name, kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(InputKind::detect(Path::new("a.json")), InputKind::Json);
        assert_eq!(InputKind::detect(Path::new("A.JSON")), InputKind::Json);
        assert_eq!(InputKind::detect(Path::new("a.json.gz")), InputKind::JsonGzip);
        assert_eq!(InputKind::detect(Path::new("a.yaml")), InputKind::Yaml);
        assert_eq!(InputKind::detect(Path::new("Makefile")), InputKind::Yaml);
    }

    #[test]
    fn test_paths_or_stdin() {
        assert_eq!(paths_or_stdin(&[]), vec![None]);
        let files = vec![PathBuf::from("-"), PathBuf::from("x.yaml")];
        assert_eq!(
            paths_or_stdin(&files),
            vec![None, Some(Path::new("x.yaml"))]
        );
    }
}
