// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service modules for catalog loading, upload storage and AI collaborators.

pub mod catalog;
pub mod generator;
pub mod uploads;

pub use catalog::load_engine;
pub use generator::DesignGenerator;
pub use uploads::UploadStore;
