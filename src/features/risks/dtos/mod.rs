mod risk_dto;

pub use risk_dto::{CreateRiskDto, RiskListItemDto, RiskResponseDto, UpdateRiskDto};
