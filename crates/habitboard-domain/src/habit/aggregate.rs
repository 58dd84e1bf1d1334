use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Frequency;
use crate::shared::{DomainError, HabitId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    name: String,
    category: String,
    frequency: Frequency,
    goal: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(
        name: String,
        category: String,
        frequency: Frequency,
        goal: f64,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_category(&category)?;
        Self::validate_goal(goal)?;

        let now = Utc::now();
        Ok(Self {
            id: HabitId::new(),
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            frequency,
            goal,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(
        id: HabitId,
        name: String,
        category: String,
        frequency: Frequency,
        goal: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            frequency,
            goal,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_name(&mut self, name: String) -> Result<(), DomainError> {
        Self::validate_name(&name)?;
        self.name = name.trim().to_string();
        self.touch();
        Ok(())
    }

    pub fn update_category(&mut self, category: String) -> Result<(), DomainError> {
        Self::validate_category(&category)?;
        self.category = category.trim().to_string();
        self.touch();
        Ok(())
    }

    pub fn update_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
        self.touch();
    }

    pub fn update_goal(&mut self, goal: f64) -> Result<(), DomainError> {
        Self::validate_goal(goal)?;
        self.goal = goal;
        self.touch();
        Ok(())
    }

    // Every mutation stamps updated_at.
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_category(category: &str) -> Result<(), DomainError> {
        if category.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_goal(goal: f64) -> Result<(), DomainError> {
        if !goal.is_finite() || !(0.0..=100.0).contains(&goal) {
            return Err(DomainError::Validation(format!(
                "Goal must be a percentage between 0 and 100, got {}",
                goal
            )));
        }
        Ok(())
    }
}
