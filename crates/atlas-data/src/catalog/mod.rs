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

//! Implements the in-memory asset catalogue.
//!
//! The catalogue owns every [`AssetRecord`] and is the sole writer of the
//! keyword index that sits beside them. Its central invariant: a record's id
//! appears in a keyword's bucket exactly when the record is live and carries
//! that keyword. Every mutating operation on [`AssetCatalog`] re-establishes
//! this before returning.
//!
//! Cross-references (relation lists and index buckets) never own records.
//! They hold [`AssetId`](atlas_core::AssetId) handles, so removing a record
//! turns every reference to it into a stale handle that resolves to "absent"
//! rather than into a dangling pointer.
//!
//! The primary entry point is the [`AssetCatalog`] struct.

mod record;
mod store;

pub use record::AssetRecord;
pub use store::AssetCatalog;

#[cfg(test)]
mod tests;
