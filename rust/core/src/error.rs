// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for catalog and rule-table construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a catalog from configuration.
///
/// Queries never fail; only construction does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Material id must not be empty (entry #{index})")]
    EmptyMaterialId { index: usize },

    #[error("Material '{id}' has an empty display name")]
    EmptyMaterialName { id: String },

    #[error("Material '{id}' is declared more than once")]
    DuplicateMaterial { id: String },

    #[error("Rule for room '{room_type}' names unknown surface '{surface}'")]
    UnknownSurface { room_type: String, surface: String },
}
