use serde::{Deserialize, Serialize};

use crate::path::NormalizationOptions;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Applied to patterns on registration and to paths on lookup. `None` keeps both verbatim.
    pub normalization: Option<NormalizationOptions>,
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn normalization(mut self, options: NormalizationOptions) -> Self {
        self.options.normalization = Some(options);
        self
    }

    pub fn default_normalization(self) -> Self {
        self.normalization(NormalizationOptions::default())
    }

    pub fn build(self) -> RouterOptions {
        self.options
    }
}
