use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Total row count with a synthetic growth percentage.
///
/// `growth` is derived from an assumed baseline of 80% of the current total and is
/// `null` when that baseline rounds down to zero. It is a display placeholder, not a
/// measured trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatDto {
    pub total: u64,
    pub growth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub projects: StatDto,
    pub services: StatDto,
    pub posts: StatDto,
    pub messages: StatDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub stats: DashboardStatsDto,
}
