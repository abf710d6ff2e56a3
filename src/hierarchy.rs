//! Directory tree to sound library hierarchy.
//!
//! Walks a directory depth-first and turns every path into a [`HierarchyNode`].
//! Sample metadata comes from file names only; file contents are never opened.

use crate::utils::sample_name::parse_sample_name;
use crate::utils::{base_name, list_children};
use crate::{CatalogError, Result, DEFAULT_INSTRUMENT, LIBRARY_KEY};

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Metadata for a path whose name follows the sample naming convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleMetadata {
    pub sound_name: String,
    pub instrument_name: String,
    pub instrument: String,
    pub bpm: String,
    pub key: String,
    pub chord_progression: String,
    pub path: PathBuf,
}

impl SampleMetadata {
    pub fn from_path(path: &Path, instrument: &str) -> Option<Self> {
        let name = parse_sample_name(&base_name(path))?;
        Some(SampleMetadata {
            sound_name: name.sound_name,
            instrument_name: name.instrument_name,
            instrument: instrument.to_string(),
            bpm: name.bpm,
            key: name.key,
            chord_progression: name.chord_progression,
            path: path.to_path_buf(),
        })
    }

    fn insert_into(&self, map: &mut Map<String, Value>) {
        let fields = [
            ("soundName", self.sound_name.clone()),
            ("InstrumentName", self.instrument_name.clone()),
            ("Instrument", self.instrument.clone()),
            ("BPM", self.bpm.clone()),
            ("Key", self.key.clone()),
            ("ChordProgression", self.chord_progression.clone()),
            ("Path", self.path.to_string_lossy().into_owned()),
        ];
        for (key, value) in fields {
            map.insert(key.to_string(), Value::String(value));
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HierarchyNode {
    /// A file whose name parsed as a sample.
    Sample(SampleMetadata),
    /// A file whose name did not. Serializes as an empty object.
    Unrecognized { path: PathBuf },
    /// A directory; `sample` is set when the directory name itself parses.
    Directory {
        path: PathBuf,
        sample: Option<SampleMetadata>,
        children: Vec<HierarchyNode>,
    },
}

impl HierarchyNode {
    pub fn path(&self) -> &Path {
        match self {
            HierarchyNode::Sample(sample) => sample.path.as_path(),
            HierarchyNode::Unrecognized { path } | HierarchyNode::Directory { path, .. } => {
                path.as_path()
            }
        }
    }

    pub fn sample(&self) -> Option<&SampleMetadata> {
        match self {
            HierarchyNode::Sample(sample) => Some(sample),
            HierarchyNode::Directory { sample, .. } => sample.as_ref(),
            HierarchyNode::Unrecognized { .. } => None,
        }
    }

    pub fn children(&self) -> &[HierarchyNode] {
        match self {
            HierarchyNode::Directory { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, HierarchyNode::Directory { .. })
    }

    // Nodes carrying metadata, this one included
    pub fn sample_count(&self) -> usize {
        let own = usize::from(self.sample().is_some());
        own + self
            .children()
            .iter()
            .map(HierarchyNode::sample_count)
            .sum::<usize>()
    }

    pub fn directory_count(&self) -> usize {
        let own = usize::from(self.is_directory());
        own + self
            .children()
            .iter()
            .map(HierarchyNode::directory_count)
            .sum::<usize>()
    }

    /// JSON form of the node. Object keys come out sorted since `Map` is ordered by key.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(sample) = self.sample() {
            sample.insert_into(&mut map);
        }
        if let HierarchyNode::Directory { children, .. } = self {
            let children = children.iter().map(HierarchyNode::to_json).collect();
            map.insert(LIBRARY_KEY.to_string(), Value::Array(children));
        }
        Value::Object(map)
    }
}

impl Serialize for HierarchyNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[derive(Clone, Debug)]
pub struct HierarchyBuilder {
    instrument: String,
    sorted: bool,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self {
            instrument: DEFAULT_INSTRUMENT.to_string(),
            sorted: false,
        }
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value written to the `Instrument` field of every sample.
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = instrument.into();
        self
    }

    /// Order children by file name instead of directory listing order.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Build the node for `path` and, when it is a directory, all of its descendants.
    ///
    /// A non-directory path is a leaf. Any other failure to inspect or list a
    /// path aborts the whole build.
    pub fn build(&self, path: &Path) -> Result<HierarchyNode> {
        debug!("Visiting {}", path.display());

        let sample = SampleMetadata::from_path(path, &self.instrument);
        let metadata = fs::metadata(path).map_err(|e| CatalogError::io(path, e))?;

        if !metadata.is_dir() {
            return Ok(match sample {
                Some(sample) => HierarchyNode::Sample(sample),
                None => HierarchyNode::Unrecognized {
                    path: path.to_path_buf(),
                },
            });
        }

        let children = list_children(path, self.sorted)?
            .iter()
            .map(|child| self.build(child))
            .collect::<Result<Vec<_>>>()?;

        Ok(HierarchyNode::Directory {
            path: path.to_path_buf(),
            sample,
            children,
        })
    }
}

/// Build with the default instrument label and listing order.
pub fn build_hierarchy(path: &Path) -> Result<HierarchyNode> {
    HierarchyBuilder::new().build(path)
}
