//! Integration tests for the coach and team import pipelines
//!
//! These tests run the pipelines against the in-memory repository and check
//! the report text together with what ends up stored.

use async_trait::async_trait;
use chrono::NaiveDate;
use footballers_api::domain::coach::Coach;
use footballers_api::domain::footballer::{BestSkillType, Footballer, PositionType};
use footballers_api::domain::repositories::{CoachRepository, TeamRepository};
use footballers_api::domain::team::Team;
use footballers_api::infrastructure::repositories::InMemoryRepository;
use footballers_api::processor::{import_coaches, import_teams, ProcessorError};

fn footballer_xml(name: &str, start: &str, end: &str, skill: &str, position: &str) -> String {
    format!(
        r#"
      <Footballer>
        <Name>{name}</Name>
        <ContractStartDate>{start}</ContractStartDate>
        <ContractEndDate>{end}</ContractEndDate>
        <BestSkillType>{skill}</BestSkillType>
        <PositionType>{position}</PositionType>
      </Footballer>"#
    )
}

fn coach_xml(name: &str, nationality: &str, footballers: &[String]) -> String {
    format!(
        r#"
  <Coach>
    <Name>{name}</Name>
    <Nationality>{nationality}</Nationality>
    <Footballers>{}
    </Footballers>
  </Coach>"#,
        footballers.concat()
    )
}

fn coaches_document(coaches: &[String]) -> String {
    format!(
        "<?xml version='1.0' encoding='UTF-8'?>\n<Coaches>{}\n</Coaches>",
        coaches.concat()
    )
}

fn seeded_footballer(name: &str) -> Footballer {
    Footballer::new(
        name.to_string(),
        NaiveDate::from_ymd_opt(2020, 7, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        BestSkillType::Endurance,
        PositionType::Midfielder,
    )
    .expect("valid footballer")
}

#[tokio::test]
async fn test_import_coach_with_one_invalid_footballer() {
    let repo = InMemoryRepository::new();
    let xml = coaches_document(&[coach_xml(
        "Mourinho",
        "Portugal",
        &[
            footballer_xml("Drogba", "01/07/2004", "30/06/2012", "4", "3"),
            footballer_xml("Lampard", "30/06/2014", "01/07/2001", "1", "2"),
        ],
    )]);

    let report = import_coaches(&repo, &xml).await.expect("import succeeds");

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Invalid data!",
            "Successfully imported coach - Mourinho with 1 footballers."
        ]
    );

    let coaches = CoachRepository::find_all(&repo).await.unwrap();
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].footballers_count(), 1);
    assert_eq!(coaches[0].footballers()[0].name(), "Drogba");
    assert_eq!(coaches[0].footballers()[0].best_skill_type(), BestSkillType::Power);
    assert_eq!(coaches[0].footballers()[0].position_type(), PositionType::Forward);
}

#[tokio::test]
async fn test_import_coaches_rejects_invalid_coach_records() {
    let repo = InMemoryRepository::new();
    let xml = coaches_document(&[
        coach_xml("M", "Portugal", &[]),
        coach_xml("Ferguson", "", &[]),
        coach_xml(&"A".repeat(41), "Scotland", &[]),
        coach_xml("Wenger", "France", &[]),
    ]);

    let report = import_coaches(&repo, &xml).await.unwrap();

    assert_eq!(
        report,
        "Invalid data!\nInvalid data!\nInvalid data!\n\
         Successfully imported coach - Wenger with 0 footballers."
    );
    let coaches = CoachRepository::find_all(&repo).await.unwrap();
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].name(), "Wenger");
}

#[tokio::test]
async fn test_import_coaches_one_line_per_record_when_children_are_valid() {
    let repo = InMemoryRepository::new();
    let valid = footballer_xml("Henry", "01/08/1999", "30/06/2007", "3", "3");
    let xml = coaches_document(&[
        coach_xml("Wenger", "France", &[valid.clone()]),
        coach_xml("X", "France", &[valid.clone()]),
        coach_xml("Houllier", "France", &[valid.clone(), valid]),
    ]);

    let report = import_coaches(&repo, &xml).await.unwrap();

    assert_eq!(report.lines().count(), 3);
    assert!(report.ends_with("Successfully imported coach - Houllier with 2 footballers."));
}

#[tokio::test]
async fn test_import_coaches_rejects_bad_footballer_fields() {
    let repo = InMemoryRepository::new();
    let xml = coaches_document(&[coach_xml(
        "Simeone",
        "Argentina",
        &[
            // single-digit day
            footballer_xml("Griezmann", "1/07/2014", "30/06/2019", "2", "3"),
            // equal dates
            footballer_xml("Koke", "01/07/2014", "01/07/2014", "2", "2"),
            // unknown skill code
            footballer_xml("Oblak", "01/07/2014", "30/06/2019", "9", "0"),
            // unknown position code
            footballer_xml("Godin", "01/07/2014", "30/06/2019", "0", "4"),
            // name too short
            footballer_xml("G", "01/07/2014", "30/06/2019", "0", "1"),
            footballer_xml("Saul", "01/07/2014", "30/06/2019", "1", "2"),
        ],
    )]);

    let report = import_coaches(&repo, &xml).await.unwrap();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[..5].iter().all(|l| *l == "Invalid data!"));
    assert_eq!(
        lines[5],
        "Successfully imported coach - Simeone with 1 footballers."
    );
}

#[tokio::test]
async fn test_import_coaches_keeps_coach_when_every_footballer_fails() {
    let repo = InMemoryRepository::new();
    let xml = coaches_document(&[coach_xml(
        "Bielsa",
        "Argentina",
        &[footballer_xml("Bamford", "32/01/2018", "30/06/2022", "1", "3")],
    )]);

    let report = import_coaches(&repo, &xml).await.unwrap();

    assert_eq!(
        report,
        "Invalid data!\nSuccessfully imported coach - Bielsa with 0 footballers."
    );
    let coaches = CoachRepository::find_all(&repo).await.unwrap();
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].footballers_count(), 0);
}

#[tokio::test]
async fn test_import_coaches_malformed_document_is_fatal() {
    let repo = InMemoryRepository::new();

    let result = import_coaches(&repo, "<Coaches><Coach><Name>Broken</Name>").await;

    assert!(matches!(result, Err(ProcessorError::MalformedXml(_))));
    assert!(CoachRepository::find_all(&repo).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_teams_links_dedups_and_reports() {
    let repo = InMemoryRepository::new();
    let ids = repo
        .seed_footballers(vec![seeded_footballer("Rui Costa"), seeded_footballer("Eusebio")])
        .await;
    let (first, second) = (ids[0], ids[1]);

    let json = format!(
        r#"[
            {{ "Name": "Benfica", "Nationality": "Portugal", "Trophies": "38",
               "Footballers": [{first}, {second}, {first}, 999] }},
            {{ "Name": "Bad!Name", "Nationality": "Portugal", "Trophies": "1", "Footballers": [] }},
            {{ "Name": "Porto", "Nationality": "Portugal", "Trophies": "0", "Footballers": [{first}] }},
            {{ "Name": "Braga", "Nationality": "Portugal", "Trophies": "abc", "Footballers": [{first}] }},
            {{ "Name": "Sporting CP", "Nationality": "Portugal", "Trophies": "23" }}
        ]"#
    );

    let report = import_teams(&repo, &repo, &json).await.expect("import succeeds");

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Invalid data!",
            "Successfully imported team - Benfica with 2 footballers.",
            "Invalid data!",
            "Invalid data!",
            "Invalid data!",
            "Successfully imported team - Sporting CP with 0 footballers.",
        ]
    );

    let teams = TeamRepository::find_all(&repo).await.unwrap();
    assert_eq!(teams.len(), 2);
    let benfica = teams.iter().find(|t| t.name() == "Benfica").unwrap();
    let linked: Vec<i32> = benfica.footballers().iter().map(|l| l.footballer_id()).collect();
    assert_eq!(linked, vec![first, second]);
    assert_eq!(benfica.trophies(), 38);
}

#[tokio::test]
async fn test_import_teams_negative_trophies_invalidates_team() {
    let repo = InMemoryRepository::new();
    let json = r#"[{ "Name": "Boavista", "Nationality": "Portugal", "Trophies": "-2", "Footballers": [] }]"#;

    let report = import_teams(&repo, &repo, json).await.unwrap();

    assert_eq!(report, "Invalid data!");
    assert!(TeamRepository::find_all(&repo).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_teams_validates_name_and_nationality() {
    let repo = InMemoryRepository::new();
    let json = r#"[
        { "Name": "FC", "Nationality": "Portugal", "Trophies": "1" },
        { "Name": "Maritimo", "Nationality": "P", "Trophies": "1" },
        { "Nationality": "Portugal", "Trophies": "1" },
        { "Name": "Vitoria S.C._B-1", "Nationality": "PT", "Trophies": "1", "Footballers": null }
    ]"#;

    let report = import_teams(&repo, &repo, json).await.unwrap();

    assert_eq!(
        report,
        "Invalid data!\nInvalid data!\nInvalid data!\n\
         Successfully imported team - Vitoria S.C._B-1 with 0 footballers."
    );
}

#[tokio::test]
async fn test_import_teams_blank_nationality_invalidates_team() {
    let repo = InMemoryRepository::new();
    let json = r#"[
        { "Name": "Benfica", "Nationality": "   ", "Trophies": "3", "Footballers": [] },
        { "Name": "Porto", "Nationality": "Portugal", "Trophies": "30", "Footballers": [] }
    ]"#;

    let report = import_teams(&repo, &repo, json).await.unwrap();

    assert_eq!(
        report,
        "Invalid data!\nSuccessfully imported team - Porto with 0 footballers."
    );
    let teams = TeamRepository::find_all(&repo).await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name(), "Porto");
}

#[tokio::test]
async fn test_import_teams_accepts_numeric_trophies() {
    let repo = InMemoryRepository::new();
    let json = r#"[
        { "Name": "Benfica", "Nationality": "Portugal", "Trophies": 38, "Footballers": [] },
        { "Name": "Porto", "Nationality": "Portugal", "Trophies": "30", "Footballers": [] },
        { "Name": "Braga", "Nationality": "Portugal", "Trophies": 2.5, "Footballers": [] },
        { "Name": "Boavista", "Nationality": "Portugal", "Trophies": [1], "Footballers": [] }
    ]"#;

    let report = import_teams(&repo, &repo, json).await.expect("import succeeds");

    assert_eq!(
        report,
        "Successfully imported team - Benfica with 0 footballers.\n\
         Successfully imported team - Porto with 0 footballers.\n\
         Invalid data!\nInvalid data!"
    );
    let teams = TeamRepository::find_all(&repo).await.unwrap();
    let benfica = teams.iter().find(|t| t.name() == "Benfica").unwrap();
    assert_eq!(benfica.trophies(), 38);
}

#[tokio::test]
async fn test_import_coaches_blank_nationality_invalidates_coach() {
    let repo = InMemoryRepository::new();
    let xml = coaches_document(&[
        coach_xml("Ferguson", "   ", &[]),
        coach_xml("Wenger", "France", &[]),
    ]);

    let report = import_coaches(&repo, &xml).await.unwrap();

    assert_eq!(
        report,
        "Invalid data!\nSuccessfully imported coach - Wenger with 0 footballers."
    );
}

#[tokio::test]
async fn test_import_teams_malformed_json_is_fatal() {
    let repo = InMemoryRepository::new();

    let result = import_teams(&repo, &repo, r#"[{ "Name": "Benfica", "#).await;

    assert!(matches!(result, Err(ProcessorError::MalformedJson(_))));
}

/// Repository whose commit always fails
struct FailingRepository;

#[async_trait]
impl CoachRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Coach>, String> {
        Ok(Vec::new())
    }

    async fn save_all(&self, _coaches: Vec<Coach>) -> Result<(), String> {
        Err("Failed to commit coaches: disk full".to_string())
    }
}

#[async_trait]
impl TeamRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Team>, String> {
        Ok(Vec::new())
    }

    async fn save_all(&self, _teams: Vec<Team>) -> Result<(), String> {
        Err("Failed to commit teams: disk full".to_string())
    }
}

#[tokio::test]
async fn test_import_commit_failure_propagates() {
    let xml = coaches_document(&[coach_xml("Wenger", "France", &[])]);

    let result = import_coaches(&FailingRepository, &xml).await;

    match result {
        Err(ProcessorError::Repository(message)) => assert!(message.contains("disk full")),
        other => panic!("Expected repository error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_import_teams_commit_failure_propagates() {
    let footballers = InMemoryRepository::new();
    let json = r#"[{ "Name": "Benfica", "Nationality": "Portugal", "Trophies": "1" }]"#;

    let result = import_teams(&FailingRepository, &footballers, json).await;

    assert!(matches!(result, Err(ProcessorError::Repository(_))));
}
