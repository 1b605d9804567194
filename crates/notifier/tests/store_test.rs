use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use datebook_core::models::reminder::{Reminder, reminder_key};
use datebook_notifier::store::ReminderStore;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn reminder(booking_id: Uuid, token: &str, days_out: i64) -> Reminder {
    Reminder {
        key: reminder_key(booking_id, token),
        booking_id,
        slot_token: token.to_string(),
        booked_date: date(2026, 3, 1),
        remind_at: base_time() + Duration::days(days_out),
        title: "Booking reminder".to_string(),
        body: "details".to_string(),
    }
}

#[tokio::test]
async fn put_and_read_back() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let id = Uuid::new_v4();
    let original = reminder(id, "2026-03-01T10:00:00+05:30", 10);

    store.put(&original).await.unwrap();

    let all = store.all().await.unwrap();
    assert_eq!(all, vec![original]);
}

#[tokio::test]
async fn put_with_same_key_replaces() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let id = Uuid::new_v4();
    let mut r = reminder(id, "2026-03-01T10:00:00+05:30", 10);

    store.put(&r).await.unwrap();
    r.title = "Updated title".to_string();
    store.put(&r).await.unwrap();

    let all = store.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Updated title");
}

#[tokio::test]
async fn all_orders_by_due_time() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let id = Uuid::new_v4();

    store
        .put(&reminder(id, "2026-03-02T10:00:00+05:30", 20))
        .await
        .unwrap();
    store
        .put(&reminder(id, "2026-03-01T10:00:00+05:30", 10))
        .await
        .unwrap();

    let all = store.all().await.unwrap();
    assert_eq!(all[0].slot_token, "2026-03-01T10:00:00+05:30");
    assert_eq!(all[1].slot_token, "2026-03-02T10:00:00+05:30");
}

#[tokio::test]
async fn for_booking_filters_by_owner() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let mine = Uuid::new_v4();
    let other = Uuid::new_v4();

    store
        .put(&reminder(mine, "2026-03-01T10:00:00+05:30", 10))
        .await
        .unwrap();
    store
        .put(&reminder(other, "2026-03-02T10:00:00+05:30", 20))
        .await
        .unwrap();

    let pending = store.for_booking(mine).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].booking_id, mine);
}

#[tokio::test]
async fn delete_keys_removes_only_the_batch() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let id = Uuid::new_v4();
    let a = reminder(id, "2026-03-01T10:00:00+05:30", 10);
    let b = reminder(id, "2026-03-02T10:00:00+05:30", 20);
    let c = reminder(id, "2026-03-03T10:00:00+05:30", 30);

    for r in [&a, &b, &c] {
        store.put(r).await.unwrap();
    }
    store
        .delete_keys(&[a.key.clone(), c.key.clone()])
        .await
        .unwrap();

    let all = store.all().await.unwrap();
    assert_eq!(all, vec![b]);
}

#[tokio::test]
async fn delete_keys_with_empty_batch_is_a_no_op() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let id = Uuid::new_v4();
    store
        .put(&reminder(id, "2026-03-01T10:00:00+05:30", 10))
        .await
        .unwrap();

    store.delete_keys(&[]).await.unwrap();

    assert_eq!(store.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_for_booking_cascades_every_slot() {
    let store = ReminderStore::open_in_memory().await.unwrap();
    let mine = Uuid::new_v4();
    let other = Uuid::new_v4();

    store
        .put(&reminder(mine, "2026-03-01T10:00:00+05:30", 10))
        .await
        .unwrap();
    store
        .put(&reminder(mine, "2026-03-02T10:00:00+05:30", 20))
        .await
        .unwrap();
    store
        .put(&reminder(other, "2026-03-03T10:00:00+05:30", 30))
        .await
        .unwrap();

    store.delete_for_booking(mine).await.unwrap();

    let all = store.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].booking_id, other);
}

#[tokio::test]
async fn reminders_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reminders.db");
    let path = path.to_str().unwrap();
    let id = Uuid::new_v4();
    let original = reminder(id, "2026-03-01T10:00:00+05:30", 10);

    {
        let store = ReminderStore::open(path).await.unwrap();
        store.put(&original).await.unwrap();
    }

    // A fresh open runs the schema check again without losing rows
    let store = ReminderStore::open(path).await.unwrap();
    assert_eq!(store.all().await.unwrap(), vec![original]);
}
