//! Integration tests for entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create the full hierarchy (original work -> characters / rules,
//!   project -> characters / foreshadows / episodes / notes)
//! - Monotonic append ordering for episodes and notes
//! - Partial updates and list operations

use sqlx::PgPool;

use novelmind_db::models::character::CreateCharacter;
use novelmind_db::models::episode::{CreateEpisode, CreateEpisodeNote, UpdateEpisode};
use novelmind_db::models::foreshadow::CreateForeshadow;
use novelmind_db::models::original_work::CreateOriginalWork;
use novelmind_db::models::project::{CreateProject, UpdateProject};
use novelmind_db::models::world_rule::CreateWorldRule;
use novelmind_db::repositories::{
    CharacterRepo, EpisodeNoteRepo, EpisodeRepo, ForeshadowRepo, OriginalWorkRepo, ProjectRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        description: None,
        personality: None,
        appearance: None,
        abilities: None,
        speech_patterns: None,
        relationships: None,
    }
}

fn new_work(title: &str) -> CreateOriginalWork {
    CreateOriginalWork {
        title: title.to_string(),
        media_type: "Anime".to_string(),
        canon_characters: vec![],
        world_rules: vec![],
    }
}

fn new_project(title: &str, original_work_id: Option<i64>) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        original_work_id,
        timeline_setting: None,
        au_settings: None,
        active_character_ids: None,
        tone: None,
    }
}

fn new_foreshadow(title: &str) -> CreateForeshadow {
    CreateForeshadow {
        title: title.to_string(),
        description: None,
        status: None,
        planted_at: None,
        expected_payoff: None,
    }
}

// ---------------------------------------------------------------------------
// Original works
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_work_with_children(pool: PgPool) {
    let mut input = new_work("귀멸의 칼날 AU 원작");
    input.canon_characters = vec![new_character("탄지로"), new_character("네즈코")];
    input.world_rules = vec![CreateWorldRule {
        title: "오니의 약점".to_string(),
        description: "햇빛".to_string(),
    }];

    let detail = OriginalWorkRepo::create_with_children(&pool, &input)
        .await
        .unwrap();

    assert_eq!(detail.work.source, "Custom");
    assert_eq!(detail.canon_characters.len(), 2);
    assert!(detail.canon_characters.iter().all(|c| c.is_canon));
    assert_eq!(detail.world_rules.len(), 1);

    let found = OriginalWorkRepo::find_detail(&pool, detail.work.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.canon_characters.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preset_works_are_seeded(pool: PgPool) {
    let works = OriginalWorkRepo::list(&pool).await.unwrap();
    let presets: Vec<_> = works.iter().filter(|w| w.source == "Preset").collect();
    assert_eq!(presets.len(), 3);
    assert!(presets.iter().any(|w| w.title == "귀멸의 칼날"));

    // Preset characters come with trait lists ready for prompt assembly.
    let demon_slayer = presets.iter().find(|w| w.title == "귀멸의 칼날").unwrap();
    let characters = CharacterRepo::list_by_original(&pool, demon_slayer.id)
        .await
        .unwrap();
    assert_eq!(characters.len(), 3);
    let tanjiro = characters.iter().find(|c| c.name == "카마도 탄지로").unwrap();
    assert!(tanjiro.personality.contains(&"다정함".to_string()));
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_update_project(pool: PgPool) {
    let work = OriginalWorkRepo::create_with_children(&pool, &new_work("원작"))
        .await
        .unwrap();

    let project = ProjectRepo::create(&pool, &new_project("내 프로젝트", Some(work.work.id)))
        .await
        .unwrap();
    assert_eq!(project.timeline_setting, "");
    assert!(project.au_settings.is_empty());

    // Partial update leaves unspecified fields untouched.
    let updated = ProjectRepo::update_with_children(
        &pool,
        project.id,
        &UpdateProject {
            title: None,
            timeline_setting: Some("엔딩 이후".to_string()),
            au_settings: Some(vec!["현대물".to_string()]),
            active_character_ids: None,
            tone: None,
            custom_characters: None,
            foreshadows: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "내 프로젝트");
    assert_eq!(updated.timeline_setting, "엔딩 이후");
    assert_eq!(updated.au_settings, vec!["현대물"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_projects_includes_original_work(pool: PgPool) {
    let work = OriginalWorkRepo::create_with_children(&pool, &new_work("원작"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("A", Some(work.work.id)))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("B", None)).await.unwrap();

    let projects = ProjectRepo::list_with_original(&pool).await.unwrap();
    assert_eq!(projects.len(), 2);

    let a = projects.iter().find(|p| p.project.title == "A").unwrap();
    assert_eq!(a.original_work.as_ref().unwrap().title, "원작");

    let b = projects.iter().find(|p| p.project.title == "B").unwrap();
    assert!(b.original_work.is_none());
}

// ---------------------------------------------------------------------------
// Foreshadows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreshadow_defaults_to_pending(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P", None)).await.unwrap();

    let foreshadow = ForeshadowRepo::create(&pool, project.id, &new_foreshadow("복선"))
        .await
        .unwrap();
    assert_eq!(foreshadow.status, "Pending");
    assert!(foreshadow.planted_at.is_none());
}

// ---------------------------------------------------------------------------
// Episodes and notes: monotonic append ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn episodes_append_in_order(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P", None)).await.unwrap();

    let first = EpisodeRepo::create(
        &pool,
        project.id,
        &CreateEpisode {
            title: "1화".to_string(),
        },
    )
    .await
    .unwrap();
    let second = EpisodeRepo::create(
        &pool,
        project.id,
        &CreateEpisode {
            title: "2화".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(first.sort_order, 0);
    assert_eq!(second.sort_order, 1);
    assert_eq!(first.content, "");

    let episodes = EpisodeRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(episodes[0].title, "1화");
    assert_eq!(episodes[1].title, "2화");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn notes_append_per_episode(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P", None)).await.unwrap();
    let episode = EpisodeRepo::create(
        &pool,
        project.id,
        &CreateEpisode {
            title: "1화".to_string(),
        },
    )
    .await
    .unwrap();

    let first = EpisodeNoteRepo::create(
        &pool,
        episode.id,
        &CreateEpisodeNote {
            content: Some("첫 메모".to_string()),
            note_type: None,
        },
    )
    .await
    .unwrap();
    let second = EpisodeNoteRepo::create(
        &pool,
        episode.id,
        &CreateEpisodeNote {
            content: Some("대사 메모".to_string()),
            note_type: Some("Dialogue".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(first.sort_order, 0);
    assert_eq!(first.note_type, "General");
    assert_eq!(second.sort_order, 1);
    assert_eq!(second.note_type, "Dialogue");

    let detail = EpisodeRepo::find_detail(&pool, episode.id).await.unwrap().unwrap();
    assert_eq!(detail.notes.len(), 2);
    assert_eq!(detail.notes[0].content, "첫 메모");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn episode_content_is_updatable(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P", None)).await.unwrap();
    let episode = EpisodeRepo::create(
        &pool,
        project.id,
        &CreateEpisode {
            title: "1화".to_string(),
        },
    )
    .await
    .unwrap();

    let updated = EpisodeRepo::update(
        &pool,
        episode.id,
        &UpdateEpisode {
            title: None,
            content: Some("타래 본문".to_string()),
            sort_order: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "1화");
    assert_eq!(updated.content, "타래 본문");
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn custom_characters_are_not_canon(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P", None)).await.unwrap();

    let mut input = new_character("오리캐");
    input.personality = Some(vec!["냉철함".to_string()]);
    let character = CharacterRepo::create_for_project(&pool, project.id, &input)
        .await
        .unwrap();

    assert!(!character.is_canon);
    assert_eq!(character.project_id, Some(project.id));
    assert!(character.original_work_id.is_none());
    assert_eq!(character.personality, vec!["냉철함"]);
    assert_eq!(character.relationships, serde_json::json!([]));
}
