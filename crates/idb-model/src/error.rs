use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("industry id must not be empty")]
    EmptyIndustryId,
    #[error("unknown tier: {0}")]
    UnknownTier(String),
    #[error("quality score {field} = {value} is outside 0..=100")]
    QualityScoreOutOfRange { field: &'static str, value: u8 },
    #[error("quality score minimum {min} exceeds maximum {max}")]
    QualityRangeInverted { min: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
