// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// User-registered rule describing how to pull one custom field out of a
/// result card. No attribute means "take the trimmed inner text".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    pub tag: String,
    pub class: Option<String>,
    pub attribute: Option<String>,
}

impl ExtractionRule {
    pub fn new(tag: &str, class: Option<&str>, attribute: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            class: class.map(|c| c.to_string()),
            attribute: attribute.map(|a| a.to_string()),
        }
    }
}
