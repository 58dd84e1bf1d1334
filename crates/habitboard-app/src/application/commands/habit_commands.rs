use habitboard_domain::habit::Frequency;

use crate::application::dtos::HabitDto;

/// Create a new habit.
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub name: String,
    pub category: String,
    pub frequency: Frequency,
    pub goal: f64,
}

#[derive(Debug, Clone)]
pub struct CreateHabitResult {
    pub habit: HabitDto,
}

/// Update an existing habit. Only the fields that are `Some` are changed.
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub habit_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<Frequency>,
    pub goal: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct UpdateHabitResult {
    pub habit: HabitDto,
}

/// Delete a habit together with its completion log.
#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub habit_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteHabitResult {
    pub removed_completions: u64,
}
