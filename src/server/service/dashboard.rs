//! Admin dashboard aggregates.

use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DashboardStatsDto, StatDto},
    server::{
        data::{
            message::MessageRepository, post::PostRepository, project::ProjectRepository,
            service::ServiceRepository,
        },
        error::AppError,
    },
};

/// Share of the current total assumed as the previous period's total.
const BASELINE_RATIO: f64 = 0.8;

/// Synthetic growth percentage shown next to each dashboard total.
///
/// There is no historical data; the baseline is assumed to be 80% of `current`
/// (rounded down) and the result is rounded to one decimal place. Returns `Some(0.0)`
/// for an empty table and `None` when the baseline rounds down to zero.
pub fn calculate_growth(current: u64) -> Option<f64> {
    if current == 0 {
        return Some(0.0);
    }

    let baseline = (current as f64 * BASELINE_RATIO).floor();
    if baseline == 0.0 {
        return None;
    }

    let growth = (current as f64 - baseline) / baseline * 100.0;

    Some((growth * 10.0).round() / 10.0)
}

fn stat(total: u64) -> StatDto {
    StatDto {
        total,
        growth: calculate_growth(total),
    }
}

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts projects, services, posts and messages concurrently
    pub async fn stats(&self) -> Result<DashboardStatsDto, AppError> {
        let projects = ProjectRepository::new(self.db);
        let services = ServiceRepository::new(self.db);
        let posts = PostRepository::new(self.db);
        let messages = MessageRepository::new(self.db);

        let (project_count, service_count, post_count, message_count) = tokio::try_join!(
            projects.count(),
            services.count(),
            posts.count(),
            messages.count(),
        )?;

        Ok(DashboardStatsDto {
            projects: stat(project_count),
            services: stat(service_count),
            posts: stat(post_count),
            messages: stat(message_count),
        })
    }
}
