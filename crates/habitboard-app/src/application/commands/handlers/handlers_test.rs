use chrono::NaiveDate;
use std::sync::Arc;

use habitboard_domain::completion::{CompletionLogRepository, CompletionRecord};
use habitboard_domain::habit::{Frequency, Habit, HabitRepository};
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

use crate::application::commands::{
    CommandHandler, CreateHabitCommand, DeleteHabitCommand, RecordCompletionCommand,
    UpdateHabitCommand,
};
use crate::application::test_support::{InMemoryCompletionLogRepository, InMemoryHabitRepository};

use super::{
    CreateHabitHandler, DeleteHabitHandler, RecordCompletionHandler, UpdateHabitHandler,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

async fn seeded_habit(repo: &InMemoryHabitRepository) -> Habit {
    let habit = Habit::new(
        "Hydrate".to_string(),
        "health".to_string(),
        Frequency::Daily,
        100.0,
    )
    .expect("create habit");
    repo.insert(habit.clone()).await;
    habit
}

#[tokio::test]
async fn test_create_habit_persists_and_returns_dto() {
    let habit_repo = Arc::new(InMemoryHabitRepository::new());
    let handler = CreateHabitHandler::new(habit_repo.clone());

    let result = handler
        .handle(CreateHabitCommand {
            name: "Jog".to_string(),
            category: "exercise".to_string(),
            frequency: Frequency::Daily,
            goal: 85.0,
        })
        .await
        .expect("create habit");

    assert_eq!(result.habit.name, "Jog");
    assert_eq!(result.habit.frequency, "daily");
    assert_eq!(result.habit.goal, 85.0);

    let stored = habit_repo
        .find_by_id(&HabitId::from_string(&result.habit.id))
        .await
        .expect("find habit")
        .expect("habit stored");
    assert_eq!(stored.name(), "Jog");
}

#[tokio::test]
async fn test_create_habit_rejects_invalid_goal() {
    let handler = CreateHabitHandler::new(Arc::new(InMemoryHabitRepository::new()));

    let result = handler
        .handle(CreateHabitCommand {
            name: "Jog".to_string(),
            category: "exercise".to_string(),
            frequency: Frequency::Daily,
            goal: 250.0,
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_update_habit_applies_only_present_fields() {
    let habit_repo = Arc::new(InMemoryHabitRepository::new());
    let habit = seeded_habit(&habit_repo).await;
    let handler = UpdateHabitHandler::new(habit_repo.clone());

    let result = handler
        .handle(UpdateHabitCommand {
            habit_id: habit.id().as_str().to_string(),
            name: Some("Drink water".to_string()),
            category: None,
            frequency: None,
            goal: Some(75.0),
        })
        .await
        .expect("update habit");

    assert_eq!(result.habit.name, "Drink water");
    assert_eq!(result.habit.goal, 75.0);
    // Untouched fields keep their values
    assert_eq!(result.habit.category, "health");
    assert_eq!(result.habit.frequency, "daily");
    assert!(result.habit.updated_at > habit.updated_at());
}

#[tokio::test]
async fn test_update_habit_unknown_id_is_not_found() {
    let handler = UpdateHabitHandler::new(Arc::new(InMemoryHabitRepository::new()));

    let result = handler
        .handle(UpdateHabitCommand {
            habit_id: HabitId::new().as_str().to_string(),
            name: Some("Anything".to_string()),
            category: None,
            frequency: None,
            goal: None,
        })
        .await;

    assert!(matches!(result, Err(DomainError::HabitNotFound(_))));
}

#[tokio::test]
async fn test_delete_habit_cascades_to_completion_log() {
    let habit_repo = Arc::new(InMemoryHabitRepository::new());
    let completion_repo = Arc::new(InMemoryCompletionLogRepository::new());
    let habit = seeded_habit(&habit_repo).await;

    for day in 1..=3 {
        completion_repo
            .upsert(&CompletionRecord::new(
                habit.id().clone(),
                date(2026, 1, day),
                true,
            ))
            .await
            .expect("upsert record");
    }

    let handler = DeleteHabitHandler::new(habit_repo.clone(), completion_repo.clone());
    let result = handler
        .handle(DeleteHabitCommand {
            habit_id: habit.id().as_str().to_string(),
        })
        .await
        .expect("delete habit");

    assert_eq!(result.removed_completions, 3);
    assert_eq!(completion_repo.len().await, 0);
    assert!(habit_repo
        .find_by_id(habit.id())
        .await
        .expect("find habit")
        .is_none());
}

#[tokio::test]
async fn test_delete_habit_unknown_id_is_not_found() {
    let handler = DeleteHabitHandler::new(
        Arc::new(InMemoryHabitRepository::new()),
        Arc::new(InMemoryCompletionLogRepository::new()),
    );

    let result = handler
        .handle(DeleteHabitCommand {
            habit_id: HabitId::new().as_str().to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::HabitNotFound(_))));
}

#[tokio::test]
async fn test_record_completion_upserts_mark() {
    let habit_repo = Arc::new(InMemoryHabitRepository::new());
    let completion_repo = Arc::new(InMemoryCompletionLogRepository::new());
    let habit = seeded_habit(&habit_repo).await;
    let handler = RecordCompletionHandler::new(habit_repo.clone(), completion_repo.clone());

    let day = date(2026, 1, 15);
    let result = handler
        .handle(RecordCompletionCommand {
            habit_id: habit.id().as_str().to_string(),
            date: day,
            completed: true,
        })
        .await
        .expect("record completion");

    assert_eq!(result.record.date, day);
    assert!(result.record.completed);

    // A second mark for the same day replaces the first, it does not add a row
    handler
        .handle(RecordCompletionCommand {
            habit_id: habit.id().as_str().to_string(),
            date: day,
            completed: false,
        })
        .await
        .expect("record completion again");

    assert_eq!(completion_repo.len().await, 1);
    let stored = completion_repo
        .find(habit.id(), day)
        .await
        .expect("find record")
        .expect("record stored");
    assert!(!stored.is_completed());
}

#[tokio::test]
async fn test_record_completion_unknown_habit_is_not_found() {
    let handler = RecordCompletionHandler::new(
        Arc::new(InMemoryHabitRepository::new()),
        Arc::new(InMemoryCompletionLogRepository::new()),
    );

    let result = handler
        .handle(RecordCompletionCommand {
            habit_id: HabitId::new().as_str().to_string(),
            date: date(2026, 1, 15),
            completed: true,
        })
        .await;

    assert!(matches!(result, Err(DomainError::HabitNotFound(_))));
}
