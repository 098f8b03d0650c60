// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Startup construction of the recommendation engine.

use anyhow::Context;
use roomai_core::{CatalogDocument, RecommendationEngine};
use std::path::Path;

/// Build the engine from `materials_file`, or the embedded tables when unset.
///
/// A malformed file is fatal. Rule ids missing from the catalog are only
/// logged, since queries skip them anyway.
pub async fn load_engine(materials_file: Option<&Path>) -> anyhow::Result<RecommendationEngine> {
    let engine = match materials_file {
        Some(path) => {
            let raw = tokio::fs::read(path)
                .await
                .with_context(|| format!("reading materials file {}", path.display()))?;
            let document: CatalogDocument = serde_json::from_slice(&raw)
                .with_context(|| format!("parsing materials file {}", path.display()))?;
            let engine = document
                .into_engine()
                .with_context(|| format!("validating materials file {}", path.display()))?;
            tracing::info!(path = %path.display(), "Loaded material catalog from file");
            engine
        }
        None => RecommendationEngine::builtin(),
    };

    for dangling in engine.dangling_ids() {
        tracing::warn!(
            room_type = %dangling.room_type,
            surface = %dangling.surface,
            material_id = %dangling.material_id,
            "Rule references a material missing from the catalog; it will be skipped"
        );
    }

    tracing::info!(
        materials = engine.catalog().len(),
        rules = engine.rules().len(),
        "Recommendation engine ready"
    );

    Ok(engine)
}
