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

//! The owning store and its secondary indices.

use super::record::AssetRecord;
use atlas_core::{AssetId, AssetMetadata, AssetType};
use std::collections::HashMap;

/// The central container for all asset records and their indices.
///
/// The catalogue owns every record; the keyword index and all relation lists
/// hold [`AssetId`] handles only. Slots of removed records are recycled via
/// a free list with a generation bump, so stale handles resolve to `None`
/// in O(1) instead of aliasing a later record.
///
/// Designed for single-threaded, synchronous use: nothing here blocks, and
/// every query returns ids or borrows that are valid until the next
/// mutating call. Callers in a multi-writer environment must wrap the whole
/// catalogue in their own lock.
#[derive(Debug, Default, Clone)]
pub struct AssetCatalog {
    /// One slot per record that has ever been inserted. Each entry carries
    /// the slot's current `AssetId` (including generation) and the record,
    /// which is `Some` only while the record is live.
    slots: Vec<(AssetId, Option<AssetRecord>)>,

    /// Slot indices available for reuse, giving O(1) allocation for
    /// previously removed records.
    freed_slots: Vec<u32>,

    /// Live records in insertion order. Slot reuse would otherwise scramble
    /// the order that `find_by_type` and removal scans are specified in.
    order: Vec<AssetId>,

    /// Keyword to ids of live records carrying that keyword, in bucket
    /// insertion order. Buckets are created on demand and left in place
    /// (possibly empty) when their last member is removed.
    by_keyword: HashMap<String, Vec<AssetId>>,
}

impl AssetCatalog {
    /// Creates a new, empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record built from `metadata` and indexes its keywords.
    ///
    /// Names are not checked for uniqueness: two records with the same name
    /// may coexist, and name-based operations act on the first one in
    /// insertion order. Callers that need strict uniqueness should consult
    /// [`find_by_name`](Self::find_by_name) before inserting.
    pub fn insert(&mut self, metadata: AssetMetadata) -> AssetId {
        let keywords = metadata.keywords.clone();
        let name = metadata.name.clone();
        let record = AssetRecord::new(metadata);

        let id = if let Some(index) = self.freed_slots.pop() {
            let (id_slot, record_slot) = &mut self.slots[index as usize];
            id_slot.generation += 1;
            *record_slot = Some(record);
            *id_slot
        } else {
            let id = AssetId {
                index: self.slots.len() as u32,
                generation: 0,
            };
            self.slots.push((id, Some(record)));
            id
        };
        self.order.push(id);

        for keyword in keywords {
            self.by_keyword.entry(keyword).or_default().push(id);
        }

        log::debug!("AssetCatalog: inserted '{name}' as {id:?}");
        id
    }

    /// Removes the first live record (in insertion order) named `name`.
    ///
    /// Purges the record's id from every keyword bucket it occupies, then
    /// frees its slot for reuse. Silent no-op if no record matches, so a
    /// second call with the same name after a successful removal does
    /// nothing (unless a duplicate name is still present, in which case the
    /// next one in insertion order is removed).
    pub fn remove(&mut self, name: &str) {
        let Some(id) = self.find_by_name(name) else {
            log::debug!("AssetCatalog: remove('{name}') matched nothing");
            return;
        };

        // `find_by_name` only hands out live ids, so the take always yields.
        let Some(record) = self.slots[id.index as usize].1.take() else {
            return;
        };

        for keyword in &record.metadata().keywords {
            if let Some(bucket) = self.by_keyword.get_mut(keyword) {
                // The bucket stays in the map even when emptied.
                bucket.retain(|entry| *entry != id);
            }
        }

        self.order.retain(|entry| *entry != id);
        self.freed_slots.push(id.index);
        log::debug!("AssetCatalog: removed '{name}' ({id:?})");
    }

    /// Resolves a handle to its record, if the record is still live.
    ///
    /// A handle whose generation no longer matches its slot (the record was
    /// removed, and possibly the slot recycled) yields `None`.
    pub fn get(&self, id: AssetId) -> Option<&AssetRecord> {
        self.slots
            .get(id.index as usize)
            .and_then(|(slot_id, record)| {
                if slot_id.generation == id.generation {
                    record.as_ref()
                } else {
                    None
                }
            })
    }

    /// Whether `id` still resolves to a live record.
    pub fn contains(&self, id: AssetId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of all live records with the given type, in insertion order.
    ///
    /// Deliberately a linear scan: type cardinality is tiny and this path is
    /// not hot, so no type index is maintained.
    pub fn find_by_type(&self, asset_type: AssetType) -> Vec<AssetId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.get(*id)
                    .is_some_and(|record| record.metadata().asset_type == asset_type)
            })
            .collect()
    }

    /// Ids of all live records carrying `keyword`, in bucket insertion
    /// order. Unknown keywords yield an empty vec, not an error.
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<AssetId> {
        self.by_keyword
            .get(keyword)
            .cloned()
            .unwrap_or_default()
    }

    /// The first live record (in insertion order) named `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Option<AssetId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.get(*id).is_some_and(|record| record.metadata().name == name))
    }

    /// Outgoing relations of the record named `name`, with stale handles
    /// filtered out.
    ///
    /// A relation whose target was removed after the link was made is
    /// treated as absent here, never surfaced. Unknown names yield an empty
    /// vec.
    pub fn related_of(&self, name: &str) -> Vec<AssetId> {
        let Some(id) = self.find_by_name(name) else {
            return Vec::new();
        };
        let Some(record) = self.get(id) else {
            return Vec::new();
        };
        record
            .relations()
            .iter()
            .copied()
            .filter(|target| self.contains(*target))
            .collect()
    }

    /// Appends a directed relation from `from` to `to`.
    ///
    /// No cycle or duplicate check; mutual and repeated links are allowed
    /// and tolerated by traversal. No-op if `from` is stale. `to` is taken
    /// as-is; if it is (or later becomes) stale, traversal skips it.
    pub fn add_relation(&mut self, from: AssetId, to: AssetId) {
        let Some((slot_id, Some(record))) = self.slots.get_mut(from.index as usize) else {
            log::warn!("AssetCatalog: add_relation from stale handle {from:?}");
            return;
        };
        if slot_id.generation != from.generation {
            log::warn!("AssetCatalog: add_relation from stale handle {from:?}");
            return;
        }
        record.push_relation(to);
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalogue holds no live records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over live records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetId, &AssetRecord)> {
        self.order.iter().filter_map(|id| {
            let record = self.get(*id)?;
            Some((*id, record))
        })
    }
}
