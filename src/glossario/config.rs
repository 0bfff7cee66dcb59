use crate::error::{GlossarioError, Result};
use crate::model::SectionDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "glossario.json";
const DEFAULT_SOURCE_DIR: &str = "epub_extracted/EPUB";
const DEFAULT_OUTPUT: &str = "index.html";

/// Everything the merge needs: where to read, where to write, what to merge.
///
/// Stored as JSON. Every field is optional in the file; missing fields take
/// the defaults of the legislative glossary deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GlossarioConfig {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    /// Page order, menu order. Exactly one entry is primary.
    pub sections: Vec<SectionDescriptor>,
    pub page: PageMeta,
}

/// Fixed text of the generated page outside of the sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageMeta {
    pub lang: String,
    pub title: String,
    pub heading: String,
    pub description: String,
    pub font_stylesheets: Vec<String>,
    pub stylesheet: String,
    pub script: String,
    pub footer_title: String,
    pub footer_lines: Vec<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            lang: "pt-BR".to_string(),
            title: "Glossário de Termos Legislativos - 2ª Ed.".to_string(),
            heading: "Glossário de Termos Legislativos".to_string(),
            description: "Glossário de Termos Legislativos - 2ª Edição - Câmara dos Deputados e Senado Federal".to_string(),
            font_stylesheets: vec![
                "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap"
                    .to_string(),
                "https://fonts.googleapis.com/css2?family=Merriweather:wght@300;400;700&display=swap"
                    .to_string(),
            ],
            stylesheet: "style.css".to_string(),
            script: "script.js".to_string(),
            footer_title: "Glossário de Termos Legislativos - 2ª Edição".to_string(),
            footer_lines: vec![
                "Câmara dos Deputados e Senado Federal".to_string(),
                "Brasília, Brasil".to_string(),
            ],
        }
    }
}

pub fn default_sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new("lista-siglas.xhtml", "siglas", "Lista de Siglas"),
        SectionDescriptor::new(
            "chapter1.xhtml",
            "conceitos",
            "Glossário de Termos Legislativos",
        )
        .primary(),
        SectionDescriptor::new("lista-comissoes.xhtml", "comissoes", "Comissões Permanentes"),
        SectionDescriptor::new("lista-partidos.xhtml", "partidos", "Partidos Políticos"),
        SectionDescriptor::new(
            "lista-semelhancas.xhtml",
            "semelhancas",
            "Diferenças e Semelhanças Terminológicas",
        ),
        SectionDescriptor::new("index.xhtml", "alfabetico", "Índice Alfabético"),
        SectionDescriptor::new(
            "index-hierarquico.xhtml",
            "hierarquico",
            "Índice Hierárquico",
        ),
    ]
}

impl Default for GlossarioConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            sections: default_sections(),
            page: PageMeta::default(),
        }
    }
}

impl GlossarioConfig {
    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load and validate config from `path`. A missing file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: GlossarioConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionDescriptor>) -> Self {
        self.sections = sections;
        self
    }

    /// Section ids and filenames must be unique and exactly one section primary.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(GlossarioError::Config("No sections configured".into()));
        }

        let mut ids = HashSet::new();
        let mut files = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() || section.file.is_empty() {
                return Err(GlossarioError::Config(format!(
                    "Section '{}' needs both a file and an id",
                    section.title
                )));
            }
            // Ids end up inside attribute values and a JS string literal.
            if !section.id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(GlossarioError::Config(format!(
                    "Invalid section id '{}': use only letters, digits, '-' and '_'",
                    section.id
                )));
            }
            if !ids.insert(section.id.as_str()) {
                return Err(GlossarioError::Config(format!(
                    "Duplicate section id: {}",
                    section.id
                )));
            }
            if !files.insert(section.file.as_str()) {
                return Err(GlossarioError::Config(format!(
                    "Duplicate section file: {}",
                    section.file
                )));
            }
        }

        match self.sections.iter().filter(|s| s.primary).count() {
            1 => Ok(()),
            0 => Err(GlossarioError::Config("No primary section configured".into())),
            n => Err(GlossarioError::Config(format!(
                "Expected one primary section, found {}",
                n
            ))),
        }
    }
}
