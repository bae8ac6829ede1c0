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

use serde::{Deserialize, Serialize};

/// A stable, non-owning handle to an asset record in a catalogue.
///
/// It combines a slot index with a generation count to solve the "ABA
/// problem". When a record is removed, its slot can be recycled for a new
/// record, but the generation is incremented. An old `AssetId` held by a
/// relation list or by a caller then no longer matches the slot's current
/// generation and resolves to "absent" instead of aliasing the new record.
///
/// Handles are only meaningful to the catalogue that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId {
    /// The index of the record's slot in the catalogue's slot table.
    pub index: u32,
    /// A generation counter, incremented each time the slot is recycled.
    pub generation: u32,
}
