mod normalize;

pub use normalize::{
    NormalizationOptions, NormalizationOptionsBuilder, normalize_path, normalize_pattern,
};
