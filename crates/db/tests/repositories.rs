//! Repository tests against a live PostgreSQL database.
//!
//! `#[sqlx::test]` provisions an isolated database per test and applies the
//! crate's migrations before the body runs. Requires `DATABASE_URL` to point
//! at a reachable server.

use sqlx::PgPool;

use pitchside_db::models::player::{CreatePlayer, PlayerRecord};
use pitchside_db::models::video::CreateVideo;
use pitchside_db::models::video_comment::CreateVideoComment;
use pitchside_db::repositories::{PlayerRepo, VideoCommentRepo, VideoRepo};

fn signing(name: &str, number: i32) -> CreatePlayer {
    CreatePlayer {
        name: name.to_string(),
        number,
        position: "ST".to_string(),
    }
}

fn video(title: &str) -> CreateVideo {
    CreateVideo {
        title: title.to_string(),
        video_id: "dQw4w9WgXcQ".to_string(),
        author: "coach".to_string(),
        category: "tactics".to_string(),
        description: String::new(),
    }
}

fn comment(content: &str) -> CreateVideoComment {
    CreateVideoComment {
        author: "fan".to_string(),
        content: content.to_string(),
    }
}

// ---------------------------------------------------------------------------
// PlayerRepo
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn roster_lists_by_jersey_number_ascending(pool: PgPool) {
    PlayerRepo::create(&pool, &signing("Nine", 9)).await.unwrap();
    PlayerRepo::create(&pool, &signing("Keeper", 1)).await.unwrap();
    PlayerRepo::create(&pool, &signing("Seven", 7)).await.unwrap();

    let roster = PlayerRepo::list_by_number(&pool).await.unwrap();
    let numbers: Vec<i32> = roster.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 7, 9]);
}

#[sqlx::test]
async fn new_signing_starts_at_center(pool: PgPool) {
    let player = PlayerRepo::create(&pool, &signing("Dexter", 10)).await.unwrap();
    assert_eq!(player.pos_top.as_deref(), Some("50%"));
    assert_eq!(player.pos_left.as_deref(), Some("50%"));
}

#[sqlx::test]
async fn upsert_overwrites_every_field(pool: PgPool) {
    let created = PlayerRepo::create(&pool, &signing("Dexter", 10)).await.unwrap();

    // Same id, every other field changed: the later write wins wholesale.
    let record = PlayerRecord {
        id: created.id,
        name: "Dex".to_string(),
        number: 11,
        position: "RW".to_string(),
        pos_top: Some("40%".to_string()),
        pos_left: Some("60%".to_string()),
    };
    let saved = PlayerRepo::upsert_roster(&pool, &[record]).await.unwrap();
    assert_eq!(saved.len(), 1);

    let reloaded = PlayerRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Dex");
    assert_eq!(reloaded.number, 11);
    assert_eq!(reloaded.position, "RW");
    assert_eq!(reloaded.pos_top.as_deref(), Some("40%"));
    assert_eq!(reloaded.pos_left.as_deref(), Some("60%"));
}

#[sqlx::test]
async fn upsert_clears_coordinates_for_benched(pool: PgPool) {
    let created = PlayerRepo::create(&pool, &signing("Dexter", 10)).await.unwrap();

    let record = PlayerRecord {
        id: created.id,
        name: created.name.clone(),
        number: created.number,
        position: created.position.clone(),
        pos_top: None,
        pos_left: None,
    };
    PlayerRepo::upsert_roster(&pool, &[record]).await.unwrap();

    let reloaded = PlayerRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(reloaded.pos_top, None);
    assert_eq!(reloaded.pos_left, None);
}

#[sqlx::test]
async fn upsert_inserts_unknown_ids(pool: PgPool) {
    let record = PlayerRecord {
        id: 500,
        name: "Loanee".to_string(),
        number: 23,
        position: "CM".to_string(),
        pos_top: Some("70%".to_string()),
        pos_left: Some("30%".to_string()),
    };
    let saved = PlayerRepo::upsert_roster(&pool, &[record]).await.unwrap();
    assert_eq!(saved[0].id, 500);

    let reloaded = PlayerRepo::find_by_id(&pool, 500).await.unwrap();
    assert!(reloaded.is_some());
}

#[sqlx::test]
async fn half_set_placement_rejected_by_schema(pool: PgPool) {
    let record = PlayerRecord {
        id: 1,
        name: "Broken".to_string(),
        number: 2,
        position: "CB".to_string(),
        pos_top: Some("40%".to_string()),
        pos_left: None,
    };
    let result = PlayerRepo::upsert_roster(&pool, &[record]).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// VideoCommentRepo
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn counts_by_video_groups_per_video(pool: PgPool) {
    let busy = VideoRepo::create(&pool, &video("Pressing traps")).await.unwrap();
    let quiet = VideoRepo::create(&pool, &video("Set pieces")).await.unwrap();
    let silent = VideoRepo::create(&pool, &video("Warm-up")).await.unwrap();

    VideoCommentRepo::create(&pool, busy.id, &comment("first")).await.unwrap();
    VideoCommentRepo::create(&pool, busy.id, &comment("second")).await.unwrap();
    VideoCommentRepo::create(&pool, quiet.id, &comment("only")).await.unwrap();

    let counts = VideoCommentRepo::counts_by_video(&pool).await.unwrap();

    let count_for = |id| counts.iter().find(|c| c.video_id == id).map(|c| c.count);
    assert_eq!(count_for(busy.id), Some(2));
    assert_eq!(count_for(quiet.id), Some(1));
    // Videos without comments simply have no row.
    assert_eq!(count_for(silent.id), None);
}

#[sqlx::test]
async fn deleting_a_video_cascades_to_comments(pool: PgPool) {
    let v = VideoRepo::create(&pool, &video("Derby review")).await.unwrap();
    VideoCommentRepo::create(&pool, v.id, &comment("great game")).await.unwrap();

    sqlx::query("DELETE FROM videos WHERE id = $1")
        .bind(v.id)
        .execute(&pool)
        .await
        .unwrap();

    let comments = VideoCommentRepo::list_by_video(&pool, v.id).await.unwrap();
    assert!(comments.is_empty());
}
