// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Form fields of the sign in and sign up pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
         strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum AuthField {
    Email,
    Password,
    Username,
}

/// Form fields of the article editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
         strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum EditorField {
    Title,
    Description,
    Body,
    TagInput,
}
