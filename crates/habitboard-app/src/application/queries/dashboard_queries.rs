use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use habitboard_domain::completion::CompletionLogRepository;
use habitboard_domain::habit::HabitRepository;
use habitboard_domain::DomainError;

use crate::application::dtos::DashboardSummaryDto;
use crate::application::queries::progress_queries::{month_bounds, round_rate};

/// Cross-habit overview aggregation.
pub struct DashboardQueryService {
    habit_repository: Arc<dyn HabitRepository>,
    completion_log_repository: Arc<dyn CompletionLogRepository>,
}

impl DashboardQueryService {
    pub fn new(
        habit_repository: Arc<dyn HabitRepository>,
        completion_log_repository: Arc<dyn CompletionLogRepository>,
    ) -> Self {
        Self {
            habit_repository,
            completion_log_repository,
        }
    }

    /// Compute the dashboard summary as of the given day.
    ///
    /// Weekly average covers the trailing 7 days ending on `as_of` inclusive.
    /// Monthly progress averages per-habit completion rates over the calendar
    /// month containing `as_of`.
    pub async fn dashboard(&self, as_of: NaiveDate) -> Result<DashboardSummaryDto, DomainError> {
        log::info!("[dashboard] Computing dashboard summary as of {}", as_of);

        let habits = self.habit_repository.find_all().await?;
        let total_habits = habits.len() as u32;

        let mut stats: HashMap<String, u32> = HashMap::new();
        for habit in &habits {
            *stats.entry(habit.category().to_string()).or_insert(0) += 1;
        }

        if habits.is_empty() {
            log::info!("[dashboard] No habits registered, returning empty summary");
            return Ok(DashboardSummaryDto {
                total_habits: 0,
                completed_today: 0,
                weekly_average: 0.0,
                monthly_progress: 0.0,
                stats,
            });
        }

        let habit_ids: HashSet<&str> = habits.iter().map(|h| h.id().as_str()).collect();

        // Trailing week, today included
        let week_start = as_of - Duration::days(6);
        let week_records = self
            .completion_log_repository
            .find_by_date_range(week_start, as_of)
            .await?;

        let completed_marks: HashSet<(&str, NaiveDate)> = week_records
            .iter()
            .filter(|r| r.is_completed() && habit_ids.contains(r.habit_id().as_str()))
            .map(|r| (r.habit_id().as_str(), r.completed_on()))
            .collect();

        let completed_today = completed_marks
            .iter()
            .filter(|(_, day)| *day == as_of)
            .count() as u32;

        let mut weekly_sum = 0.0;
        for offset in 0..7 {
            let day = week_start + Duration::days(offset);
            let done = completed_marks.iter().filter(|(_, d)| *d == day).count();
            weekly_sum += done as f64 / total_habits as f64;
        }
        let weekly_average = round_rate(weekly_sum / 7.0 * 100.0).clamp(0.0, 100.0);

        // Calendar month containing as_of
        let (month_start, month_end) = month_bounds(as_of.year(), as_of.month())?;
        let total_month_days = month_end.day();
        let month_records = self
            .completion_log_repository
            .find_by_date_range(month_start, month_end)
            .await?;

        let mut per_habit_counts: HashMap<&str, u32> = HashMap::new();
        for record in &month_records {
            if record.is_completed() && habit_ids.contains(record.habit_id().as_str()) {
                *per_habit_counts.entry(record.habit_id().as_str()).or_insert(0) += 1;
            }
        }

        let rate_sum: f64 = habits
            .iter()
            .map(|h| {
                let count = per_habit_counts.get(h.id().as_str()).copied().unwrap_or(0);
                round_rate(count as f64 / total_month_days as f64 * 100.0)
            })
            .sum();
        let monthly_progress = round_rate(rate_sum / total_habits as f64).clamp(0.0, 100.0);

        log::info!(
            "[dashboard] {} habits, {} completed today, weekly {}%, monthly {}%",
            total_habits,
            completed_today,
            weekly_average,
            monthly_progress
        );

        Ok(DashboardSummaryDto {
            total_habits,
            completed_today,
            weekly_average,
            monthly_progress,
            stats,
        })
    }
}
