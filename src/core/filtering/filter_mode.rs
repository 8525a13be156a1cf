use thiserror::Error;

/// Minification filter applied when sampling the image texture.
///
/// The order is fixed: the CLI selects a mode by its position in [`FilterMode::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

/// How texels within one mip level (or between two levels) are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    Nearest,
    Linear,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterModeError {
    #[error("filter index {index} is out of range, expected 0..={max}")]
    IndexOutOfRange { index: i64, max: usize },
    #[error("filter index {input:?} is not a number")]
    NotANumber { input: String },
}

impl FilterMode {
    pub const ALL: &'static [Self] = &[
        Self::Nearest,
        Self::Linear,
        Self::NearestMipmapNearest,
        Self::LinearMipmapNearest,
        Self::NearestMipmapLinear,
        Self::LinearMipmapLinear,
    ];

    pub fn from_index(index: i64) -> Result<Self, FilterModeError> {
        usize::try_from(index)
            .ok()
            .and_then(|position| Self::ALL.get(position).copied())
            .ok_or(FilterModeError::IndexOutOfRange {
                index,
                max: Self::ALL.len() - 1,
            })
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nearest => "NEAREST",
            Self::Linear => "LINEAR",
            Self::NearestMipmapNearest => "NEAREST_MIPMAP_NEAREST",
            Self::LinearMipmapNearest => "LINEAR_MIPMAP_NEAREST",
            Self::NearestMipmapLinear => "NEAREST_MIPMAP_LINEAR",
            Self::LinearMipmapLinear => "LINEAR_MIPMAP_LINEAR",
        }
    }

    /// Filter used within a mip level when the image is minified.
    #[must_use]
    pub const fn min_filter(self) -> Sampling {
        match self {
            Self::Nearest | Self::NearestMipmapNearest | Self::NearestMipmapLinear => {
                Sampling::Nearest
            }
            Self::Linear | Self::LinearMipmapNearest | Self::LinearMipmapLinear => {
                Sampling::Linear
            }
        }
    }

    /// Filter used between mip levels. Only meaningful when [`Self::uses_mipmaps`].
    #[must_use]
    pub const fn mipmap_filter(self) -> Sampling {
        match self {
            Self::NearestMipmapLinear | Self::LinearMipmapLinear => Sampling::Linear,
            _ => Sampling::Nearest,
        }
    }

    /// Magnification is always nearest.
    #[must_use]
    pub const fn mag_filter(self) -> Sampling {
        Sampling::Nearest
    }

    #[must_use]
    pub const fn uses_mipmaps(self) -> bool {
        !matches!(self, Self::Nearest | Self::Linear)
    }
}

impl Default for FilterMode {
    fn default() -> Self {
        Self::Nearest
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl std::str::FromStr for FilterMode {
    type Err = FilterModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let index = input
            .trim()
            .parse::<i64>()
            .map_err(|_| FilterModeError::NotANumber {
                input: input.to_owned(),
            })?;

        Self::from_index(index)
    }
}
