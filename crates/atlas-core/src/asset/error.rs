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

//! Error types for the asset primitives.
//!
//! The catalogue itself treats missing names as ordinary empty results, not
//! errors, so the only failure surfaced from this crate is a parse failure
//! on user-facing input.

use std::fmt;

/// The input string did not name any [`AssetType`](super::AssetType) variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAssetTypeError {
    /// The rejected input, kept verbatim for the error message.
    pub input: String,
}

impl fmt::Display for ParseAssetTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown asset type '{}' (expected 'texture', 'audio' or 'model')",
            self.input
        )
    }
}

impl std::error::Error for ParseAssetTypeError {}
