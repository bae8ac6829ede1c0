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

//! Provides the foundational types for the Atlas asset catalogue.
//!
//! This module defines the "common language" for all catalogue operations.
//! It knows what an asset *is* (a named bundle of metadata with a type tag
//! and keywords) but nothing about how records are stored or indexed. The
//! owning store and its indices live in the `atlas-data` crate and are built
//! on top of these primitives.
//!
//! The key components are:
//! - [`AssetMetadata`] and [`AssetType`]: the identity card of an asset.
//! - [`AssetId`]: a stable, generation-checked handle to a catalogued record.

mod error;
mod handle;
mod metadata;

pub use error::*;
pub use handle::*;
pub use metadata::*;
