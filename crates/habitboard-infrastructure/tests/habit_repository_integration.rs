use std::sync::Arc;

use habitboard_domain::habit::{Frequency, Habit, HabitRepository};
use habitboard_domain::shared::HabitId;
use habitboard_infrastructure::persistence::repositories::SqliteHabitRepository;

mod test_helpers;

#[tokio::test]
async fn habit_repo_save_and_find_by_id_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let habit = Habit::new(
        "Wake up at 6".to_string(),
        "health".to_string(),
        Frequency::Daily,
        90.0,
    )
    .expect("create habit");

    repo.save(&habit).await.expect("save habit");

    let found = repo
        .find_by_id(habit.id())
        .await
        .expect("find habit")
        .expect("habit should exist");

    assert_eq!(found.id(), habit.id());
    assert_eq!(found.name(), "Wake up at 6");
    assert_eq!(found.category(), "health");
    assert_eq!(found.frequency(), Frequency::Daily);
    assert_eq!(found.goal(), 90.0);
}

#[tokio::test]
async fn habit_repo_save_overwrites_existing_row_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let mut habit = Habit::new(
        "Read".to_string(),
        "learning".to_string(),
        Frequency::Daily,
        80.0,
    )
    .expect("create habit");
    repo.save(&habit).await.expect("save habit");

    habit.update_goal(95.0).expect("update goal");
    habit
        .update_name("Read 30 minutes".to_string())
        .expect("update name");
    repo.save(&habit).await.expect("save updated habit");

    let found = repo
        .find_by_id(habit.id())
        .await
        .expect("find habit")
        .expect("habit should exist");

    assert_eq!(found.name(), "Read 30 minutes");
    assert_eq!(found.goal(), 95.0);

    let all = repo.find_all().await.expect("list habits");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn habit_repo_find_all_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    for (name, category) in [
        ("Hydrate", "health"),
        ("Jog", "exercise"),
        ("Read", "learning"),
    ] {
        let habit = Habit::new(
            name.to_string(),
            category.to_string(),
            Frequency::Daily,
            100.0,
        )
        .expect("create habit");
        repo.save(&habit).await.expect("save habit");
    }

    let all = repo.find_all().await.expect("list habits");
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn habit_repo_find_unknown_id_returns_none_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let found = repo
        .find_by_id(&HabitId::new())
        .await
        .expect("find habit");

    assert!(found.is_none());
}

#[tokio::test]
async fn habit_repo_delete_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let habit = Habit::new(
        "Meditate".to_string(),
        "health".to_string(),
        Frequency::Daily,
        70.0,
    )
    .expect("create habit");
    repo.save(&habit).await.expect("save habit");

    let removed = repo.delete(habit.id()).await.expect("delete habit");
    assert!(removed);

    let found = repo.find_by_id(habit.id()).await.expect("find habit");
    assert!(found.is_none());

    let removed_again = repo.delete(habit.id()).await.expect("delete habit again");
    assert!(!removed_again);
}
