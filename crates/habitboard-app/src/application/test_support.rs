//! In-memory repository doubles for application-layer tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

use habitboard_domain::completion::{CompletionLogRepository, CompletionRecord};
use habitboard_domain::habit::{Habit, HabitRepository};
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

pub struct InMemoryHabitRepository {
    habits: RwLock<HashMap<String, Habit>>,
}

impl InMemoryHabitRepository {
    pub fn new() -> Self {
        Self {
            habits: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, habit: Habit) {
        self.habits
            .write()
            .await
            .insert(habit.id().as_str().to_string(), habit);
    }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        self.habits
            .write()
            .await
            .insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        Ok(self.habits.read().await.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Habit>, DomainError> {
        let mut all: Vec<Habit> = self.habits.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }

    async fn delete(&self, id: &HabitId) -> Result<bool, DomainError> {
        Ok(self.habits.write().await.remove(id.as_str()).is_some())
    }
}

pub struct InMemoryCompletionLogRepository {
    records: RwLock<HashMap<(String, NaiveDate), CompletionRecord>>,
}

impl InMemoryCompletionLogRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl CompletionLogRepository for InMemoryCompletionLogRepository {
    async fn upsert(&self, record: &CompletionRecord) -> Result<(), DomainError> {
        let key = (record.habit_id().as_str().to_string(), record.completed_on());
        self.records.write().await.insert(key, record.clone());
        Ok(())
    }

    async fn find(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError> {
        let key = (habit_id.as_str().to_string(), date);
        Ok(self.records.read().await.get(&key).cloned())
    }

    async fn find_by_habit_and_date_range(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        let mut matching: Vec<CompletionRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| {
                r.habit_id() == habit_id && r.completed_on() >= start && r.completed_on() <= end
            })
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.completed_on());
        Ok(matching)
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        let mut matching: Vec<CompletionRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.completed_on() >= start && r.completed_on() <= end)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.completed_on());
        Ok(matching)
    }

    async fn delete_by_habit(&self, habit_id: &HabitId) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|(id, _), _| id != habit_id.as_str());
        Ok((before - records.len()) as u64)
    }
}
