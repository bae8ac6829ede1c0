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

use atlas_core::{AssetId, AssetMetadata};
use serde::{Deserialize, Serialize};

/// A catalogued asset: one immutable metadata bundle plus its outgoing
/// relations.
///
/// Records are created and destroyed only by the
/// [`AssetCatalog`](crate::catalog::AssetCatalog); the relation list holds non-owning
/// [`AssetId`] handles into the same catalogue, never records themselves.
/// A relation stays in the list even if its target is later removed; the
/// catalogue filters stale handles out at query time instead of chasing
/// them down at removal time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    metadata: AssetMetadata,
    relations: Vec<AssetId>,
}

impl AssetRecord {
    pub(crate) fn new(metadata: AssetMetadata) -> Self {
        Self {
            metadata,
            relations: Vec::new(),
        }
    }

    /// The record's metadata. Immutable for the record's whole lifetime.
    pub fn metadata(&self) -> &AssetMetadata {
        &self.metadata
    }

    /// Outgoing relations in the order they were added.
    ///
    /// Raw view: entries may be stale if their target was removed, and
    /// duplicates or mutual cycles are permitted. Use
    /// [`AssetCatalog::related_of`](crate::catalog::AssetCatalog::related_of)
    /// for the filtered form.
    pub fn relations(&self) -> &[AssetId] {
        &self.relations
    }

    /// Appends an outgoing relation. No cycle or duplicate check.
    pub(crate) fn push_relation(&mut self, target: AssetId) {
        self.relations.push(target);
    }
}
