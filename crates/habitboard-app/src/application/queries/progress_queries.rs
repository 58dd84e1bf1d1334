use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;

use habitboard_domain::completion::CompletionLogRepository;
use habitboard_domain::habit::HabitRepository;
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

use crate::application::dtos::{DailyCompletionDto, ProgressReportDto};

/// Round a percentage to one decimal place.
pub(crate) fn round_rate(rate: f64) -> f64 {
    (rate * 10.0).round() / 10.0
}

/// First and last calendar day of the given month.
pub(crate) fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation(format!("Invalid month: {}", month)));
    }
    if !(1..=9999).contains(&year) {
        return Err(DomainError::Validation(format!("Invalid year: {}", year)));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation(format!("Invalid month: {}-{}", year, month)))?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation(format!("Invalid month: {}-{}", year, month)))?;

    Ok((first_day, last_day))
}

/// Monthly progress reporting for a single habit.
pub struct ProgressQueryService {
    habit_repository: Arc<dyn HabitRepository>,
    completion_log_repository: Arc<dyn CompletionLogRepository>,
}

impl ProgressQueryService {
    pub fn new(
        habit_repository: Arc<dyn HabitRepository>,
        completion_log_repository: Arc<dyn CompletionLogRepository>,
    ) -> Self {
        Self {
            habit_repository,
            completion_log_repository,
        }
    }

    /// Compute the completion report for one habit over one calendar month.
    ///
    /// The report covers every day of the month in ascending order; days
    /// without a logged record count as not completed.
    pub async fn monthly_progress(
        &self,
        habit_id: &str,
        year: i32,
        month: u32,
    ) -> Result<ProgressReportDto, DomainError> {
        log::info!(
            "[progress] Computing monthly progress for habit {} ({}-{:02})",
            habit_id,
            year,
            month
        );

        let (first_day, last_day) = month_bounds(year, month)?;

        let id = HabitId::from_string(habit_id);
        self.habit_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

        let records = self
            .completion_log_repository
            .find_by_habit_and_date_range(&id, first_day, last_day)
            .await?;

        if records.is_empty() {
            log::warn!(
                "[progress] No completion records for habit {} in {}-{:02}",
                habit_id,
                year,
                month
            );
        }

        let marks: HashMap<String, bool> = records
            .iter()
            .map(|r| {
                (
                    r.completed_on().format("%Y-%m-%d").to_string(),
                    r.is_completed(),
                )
            })
            .collect();

        let total_days = last_day.day();
        let mut daily_data = Vec::with_capacity(total_days as usize);
        let mut completed_days: u32 = 0;

        for day in 1..=total_days {
            let date = first_day
                .with_day(day)
                .ok_or_else(|| DomainError::Validation(format!("Invalid day: {}", day)))?;
            let key = date.format("%Y-%m-%d").to_string();
            let completed = marks.get(&key).copied().unwrap_or(false);
            if completed {
                completed_days += 1;
            }
            daily_data.push(DailyCompletionDto {
                date: key,
                completed,
            });
        }

        let completion_rate = round_rate(completed_days as f64 / total_days as f64 * 100.0);

        log::info!(
            "[progress] Habit {}: {}/{} days completed ({}%)",
            habit_id,
            completed_days,
            total_days,
            completion_rate
        );

        Ok(ProgressReportDto {
            habit_id: habit_id.to_string(),
            month: first_day.format("%B %Y").to_string(),
            total_days,
            completed_days,
            completion_rate,
            daily_data,
        })
    }
}
