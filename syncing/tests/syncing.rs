use std::path::{Path, PathBuf};

use clap::Parser;
use pretty_assertions::assert_eq;

use quizbank_models::questions::{QuestionRaw, QuestionSheet};
use quizbank_syncing::{Args, SyncConfig, SyncError, SyncRunner, SyncSummary};

const TEMPLATE_METADATA: &str = indoc::indoc!(
    r#"{
      "published": false,
      "slug": "",
      "ranking": 0,
      "importance": "",
      "featured": false
    }
    "#
);

const TEMPLATE_CONTENT: &str = "---\ntitle: TODO_REPLACE_TITLE\n---\n\nAnswer goes here.\n";

/// Temporary repository with a template and an empty questions directory.
struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("__template__").join("todo-change-me");
        std::fs::create_dir_all(template.join("assets")).unwrap();
        std::fs::write(template.join("metadata.json"), TEMPLATE_METADATA).unwrap();
        std::fs::write(template.join("en-US.mdx"), TEMPLATE_CONTENT).unwrap();
        std::fs::write(template.join("assets").join("diagram.txt"), "diagram").unwrap();
        std::fs::create_dir_all(dir.path().join("questions")).unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn question_dir(&self, slug: &str) -> PathBuf {
        self.path().join("questions").join(slug)
    }

    /// Creates a question directory the same way a previous scaffolding would have.
    fn add_question(&self, slug: &str) {
        let dir = self.question_dir(slug);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("metadata.json"), TEMPLATE_METADATA).unwrap();
        std::fs::write(dir.join("en-US.mdx"), TEMPLATE_CONTENT).unwrap();
    }

    fn write_sheet(&self, contents: &str) {
        std::fs::write(self.path().join("data").join("react-questions.csv"), contents).unwrap();
    }

    fn config(&self, extra: &[&str]) -> SyncConfig {
        let root = self.path().to_str().unwrap();
        let sheet = format!("{root}/data/react-questions.csv");
        let questions = format!("{root}/questions");
        let template = format!("{root}/__template__/todo-change-me");
        let mut args = vec![
            "quizbank-sync",
            "--sheet",
            sheet.as_str(),
            "--questions",
            questions.as_str(),
            "--template",
            template.as_str(),
            "--jobs",
            "2",
        ];
        args.extend_from_slice(extra);
        SyncConfig::new(&Args::try_parse_from(args).unwrap())
    }

    fn read(&self, slug: &str, file: &str) -> String {
        std::fs::read_to_string(self.question_dir(slug).join(file)).unwrap()
    }

    fn metadata(&self, slug: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(slug, "metadata.json")).unwrap()
    }
}

fn question(slug: &str, ranking: &str, section: &str, title: &str) -> QuestionRaw {
    QuestionRaw {
        slug: slug.to_string(),
        title: title.to_string(),
        ranking: ranking.to_string(),
        section: section.to_string(),
    }
}

#[tokio::test]
async fn sync_existing_questions() {
    let workspace = Workspace::new();
    workspace.add_question("a");
    workspace.add_question("b");
    workspace.write_sheet("slug,title,ranking,section\na,T1,3,x\nb,T2,1,y\n");

    let config = workspace.config(&[]);
    config.check().unwrap();
    let summary = SyncRunner::run(&config).await.unwrap();

    assert_eq!(
        summary,
        SyncSummary {
            synced: 2,
            created: 0,
            metadata_updated: 2,
            contents_patched: 2,
            unchanged: 0,
            failed: Vec::new(),
        }
    );

    assert_eq!(
        workspace.metadata("a"),
        serde_json::json!({
            "published": false,
            "slug": "a",
            "ranking": 3,
            "section": "x",
            "importance": "",
            "featured": false,
        })
    );
    assert_eq!(
        workspace.read("a", "metadata.json"),
        indoc::indoc!(
            r#"{
              "published": false,
              "slug": "a",
              "ranking": 3,
              "importance": "",
              "featured": false,
              "section": "x"
            }
            "#
        )
    );
    assert_eq!(workspace.read("a", "en-US.mdx"), "---\ntitle: T1\n---\n\nAnswer goes here.\n");

    assert_eq!(workspace.metadata("b")["slug"], "b");
    assert_eq!(workspace.metadata("b")["ranking"], 1);
    assert_eq!(workspace.metadata("b")["section"], "y");
    assert_eq!(workspace.read("b", "en-US.mdx"), "---\ntitle: T2\n---\n\nAnswer goes here.\n");
}

#[tokio::test]
async fn sync_scaffolds_missing_question() {
    let workspace = Workspace::new();
    workspace.write_sheet("slug,title,ranking,section,notes\nnew-one,Brand new,7,hooks,ignored\n");

    let summary = SyncRunner::run(&workspace.config(&[])).await.unwrap();
    assert_eq!(summary.synced, 1);
    assert_eq!(summary.created, 1);

    let dir = workspace.question_dir("new-one");
    let mut files: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(files, vec!["assets", "en-US.mdx", "metadata.json"]);
    assert_eq!(std::fs::read_to_string(dir.join("assets").join("diagram.txt")).unwrap(), "diagram");

    assert_eq!(workspace.read("new-one", "en-US.mdx"), "---\ntitle: Brand new\n---\n\nAnswer goes here.\n");
    assert_eq!(
        workspace.metadata("new-one"),
        serde_json::json!({
            "published": false,
            "slug": "new-one",
            "ranking": 7,
            "section": "hooks",
            "importance": "",
            "featured": false,
        })
    );

    // The template itself stays untouched.
    let template = workspace.path().join("__template__").join("todo-change-me");
    assert_eq!(std::fs::read_to_string(template.join("en-US.mdx")).unwrap(), TEMPLATE_CONTENT);
    assert_eq!(std::fs::read_to_string(template.join("metadata.json")).unwrap(), TEMPLATE_METADATA);
}

#[tokio::test]
async fn second_run_changes_nothing() {
    let workspace = Workspace::new();
    workspace.add_question("a");
    workspace.write_sheet("slug,title,ranking,section\na,T1,3,x\nb,T2,1,y\n");
    let config = workspace.config(&[]);

    SyncRunner::run(&config).await.unwrap();
    let metadata_a = workspace.read("a", "metadata.json");
    let content_b = workspace.read("b", "en-US.mdx");

    let summary = SyncRunner::run(&config).await.unwrap();
    assert_eq!(
        summary,
        SyncSummary {
            synced: 2,
            created: 0,
            metadata_updated: 0,
            contents_patched: 0,
            unchanged: 2,
            failed: Vec::new(),
        }
    );
    assert_eq!(workspace.read("a", "metadata.json"), metadata_a);
    assert_eq!(workspace.read("b", "en-US.mdx"), content_b);
}

#[tokio::test]
async fn sheet_changes_are_propagated() {
    let workspace = Workspace::new();
    workspace.add_question("a");
    workspace.write_sheet("slug,title,ranking,section\na,T1,3,x\n");
    let config = workspace.config(&[]);
    SyncRunner::run(&config).await.unwrap();

    workspace.write_sheet("slug,title,ranking,section\na,Renamed,4,z\n");
    let summary = SyncRunner::run(&config).await.unwrap();
    assert_eq!(summary.metadata_updated, 1);
    assert_eq!(summary.contents_patched, 0);

    assert_eq!(workspace.metadata("a")["ranking"], 4);
    assert_eq!(workspace.metadata("a")["section"], "z");
    // The placeholder is gone after the first run, so the title is not replaced again.
    assert_eq!(workspace.read("a", "en-US.mdx"), "---\ntitle: T1\n---\n\nAnswer goes here.\n");
}

#[tokio::test]
async fn content_without_placeholder() {
    let workspace = Workspace::new();
    workspace.add_question("a");
    workspace.add_question("b");
    std::fs::write(workspace.question_dir("a").join("en-US.mdx"), "# Written by hand").unwrap();
    std::fs::write(workspace.question_dir("b").join("en-US.mdx"), "# Written by hand\n").unwrap();
    workspace.write_sheet("slug,title,ranking,section\na,T1,3,x\nb,T2,1,y\n");

    let summary = SyncRunner::run(&workspace.config(&[])).await.unwrap();
    assert_eq!(summary.contents_patched, 1);
    assert_eq!(workspace.read("a", "en-US.mdx"), "# Written by hand\n");
    assert_eq!(workspace.read("b", "en-US.mdx"), "# Written by hand\n");
}

#[tokio::test]
async fn later_duplicate_row_wins() {
    let workspace = Workspace::new();
    workspace.add_question("a");
    workspace.write_sheet("slug,title,ranking,section\na,First,1,x\na,Second,2,y\n");

    let summary = SyncRunner::run(&workspace.config(&[])).await.unwrap();
    assert_eq!(summary.synced, 1);
    assert_eq!(workspace.metadata("a")["ranking"], 2);
    assert_eq!(workspace.metadata("a")["section"], "y");
    assert_eq!(workspace.read("a", "en-US.mdx"), "---\ntitle: Second\n---\n\nAnswer goes here.\n");
}

#[tokio::test]
async fn failing_questions_are_isolated() {
    let workspace = Workspace::new();
    workspace.add_question("good");
    workspace.add_question("broken");
    std::fs::write(workspace.question_dir("broken").join("metadata.json"), "{ not json").unwrap();
    workspace.add_question("bad-ranking");

    let sheet: QuestionSheet = vec![
        question("good", "1", "x", "Good"),
        question("broken", "2", "x", "Broken"),
        question("bad-ranking", "second", "x", "Bad"),
    ]
    .into_iter()
    .collect();

    let summary = SyncRunner::sync(sheet, &workspace.config(&[])).await.unwrap();
    assert_eq!(summary.synced, 1);
    assert_eq!(workspace.metadata("good")["slug"], "good");
    assert_eq!(workspace.read("good", "en-US.mdx"), "---\ntitle: Good\n---\n\nAnswer goes here.\n");

    // Nothing gets written for a question whose metadata could not be merged.
    assert_eq!(workspace.read("bad-ranking", "metadata.json"), TEMPLATE_METADATA);
    assert_eq!(workspace.read("bad-ranking", "en-US.mdx"), TEMPLATE_CONTENT);

    match summary.into_result() {
        Err(SyncError::FailedQuestions(slugs)) => {
            assert_eq!(slugs, vec!["bad-ranking".to_string(), "broken".to_string()]);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn sync_multiple_locales() {
    let workspace = Workspace::new();
    workspace.add_question("a");
    std::fs::write(workspace.question_dir("a").join("zh-CN.mdx"), "# TODO_REPLACE_TITLE\n").unwrap();
    workspace.add_question("b");
    workspace.write_sheet("slug,title,ranking,section\na,T1,3,x\nb,T2,1,y\n");

    let summary = SyncRunner::run(&workspace.config(&["--all-locales"])).await.unwrap();
    assert_eq!(summary.synced, 1);
    assert_eq!(summary.contents_patched, 2);
    assert_eq!(summary.failed, vec!["b".to_string()]);
    assert_eq!(workspace.read("a", "zh-CN.mdx"), "# T1\n");
    assert_eq!(workspace.read("a", "en-US.mdx"), "---\ntitle: T1\n---\n\nAnswer goes here.\n");
}

#[tokio::test]
async fn missing_sheet() {
    let workspace = Workspace::new();
    let config = workspace.config(&[]);

    assert!(config.check().is_err());
    let result = SyncRunner::run(&config).await;
    assert!(matches!(result, Err(SyncError::Sheet(_))));
}

#[tokio::test]
async fn empty_sheet() {
    let workspace = Workspace::new();
    workspace.write_sheet("slug,title,ranking,section\n");

    let summary = SyncRunner::run(&workspace.config(&[])).await.unwrap();
    assert_eq!(summary, SyncSummary::default());
}
