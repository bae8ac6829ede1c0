// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::error::ParseAssetTypeError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The closed set of media asset categories the catalogue understands.
///
/// Extending the catalogue to a new kind of asset means adding a variant
/// here; every `match` over this enum is exhaustive, so the compiler will
/// point at each site that needs a decision for the new kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    /// A 2D image sampled by the renderer (diffuse maps, UI sprites, ...).
    Texture,
    /// A sound clip or music track.
    Audio,
    /// A 3D mesh or scene.
    Model,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Texture => write!(f, "texture"),
            AssetType::Audio => write!(f, "audio"),
            AssetType::Model => write!(f, "model"),
        }
    }
}

impl FromStr for AssetType {
    type Err = ParseAssetTypeError;

    /// Parses a type name, case-insensitively, from user-facing input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "texture" => Ok(AssetType::Texture),
            "audio" => Ok(AssetType::Audio),
            "model" => Ok(AssetType::Model),
            _ => Err(ParseAssetTypeError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Serializable metadata that describes a single asset.
///
/// This is the "identity card" the catalogue keeps for each asset: enough to
/// find it, classify it, and relate it to other assets, without ever loading
/// the actual bytes from disk. It is a plain value, immutable once
/// constructed: mutation happens at the record level in the store, never
/// inside the metadata itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// The asset's name, used as its lookup key within a catalogue.
    pub name: String,

    /// An opaque location descriptor (e.g. `Textures/Texture1.png`).
    /// The catalogue neither validates nor resolves it.
    pub path: String,

    /// Which kind of media this asset is.
    pub asset_type: AssetType,

    /// Semantic tags for keyword lookup. Order is preserved for display;
    /// duplicates are allowed and harmless.
    pub keywords: Vec<String>,

    /// Free-text grouping label (e.g. `"Game Assets"`). Informational only,
    /// not indexed.
    pub category: String,

    /// Source revision counter. Informational only, never compared by the
    /// catalogue.
    pub version: u32,
}

impl AssetMetadata {
    /// Builds a metadata bundle from its parts.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        asset_type: AssetType,
        keywords: Vec<String>,
        category: impl Into<String>,
        version: u32,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            asset_type,
            keywords,
            category: category.into(),
            version,
        }
    }
}
