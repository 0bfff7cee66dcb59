use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SOURCES: [(&str, &str); 7] = [
    ("lista-siglas.xhtml", "siglas"),
    ("chapter1.xhtml", "conceitos"),
    ("lista-comissoes.xhtml", "comissoes"),
    ("lista-partidos.xhtml", "partidos"),
    ("lista-semelhancas.xhtml", "semelhancas"),
    ("index.xhtml", "alfabetico"),
    ("index-hierarquico.xhtml", "hierarquico"),
];

fn xhtml(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head><title>Glossário</title></head>\n<body epub:type=\"bodymatter\">\n{}\n</body>\n</html>\n",
        body
    )
}

fn write_sources(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for (file, _) in SOURCES {
        fs::write(dir.join(file), xhtml(&format!("<p id=\"1\">{}</p>", file))).unwrap();
    }
    fs::write(
        dir.join("lista-siglas.xhtml"),
        xhtml(concat!(
            r#"<dt id="7">CN</dt>"#,
            r##"<dd>Congresso Nacional (<a href="#7">CN</a>), ver "##,
            r#"<a href="chapter1.xhtml#42">sessão conjunta</a></dd>"#,
        )),
    )
    .unwrap();
}

fn glossario(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("glossario").unwrap();
    cmd.current_dir(cwd).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_generate_all_sections() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("EPUB");
    let out = temp_dir.path().join("index.html");
    write_sources(&src);

    glossario(temp_dir.path())
        .arg("-s")
        .arg(&src)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing lista-siglas.xhtml..."))
        .stdout(predicate::str::contains("Processing index-hierarquico.xhtml..."))
        .stdout(predicate::str::contains(format!("Generated {}", out.display())))
        .stdout(predicate::str::contains(" KiB"));

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<section id=").count(), 7);

    let mut last = 0;
    for (_, id) in SOURCES {
        let pos = html.find(&format!("<section id=\"{}\"", id)).unwrap();
        assert!(pos > last, "section {} out of order", id);
        last = pos;
    }

    assert!(html.contains(r#"<dt id="siglas-7">CN</dt>"#));
    assert!(html.contains(r##"<a href="#siglas-7">CN</a>"##));
    assert!(html.contains(r##"<a href="#conceitos-42">sessão conjunta</a>"##));
    assert_eq!(html.matches("class=\"content-section active\"").count(), 1);
    assert!(html.contains("<section id=\"conceitos\" class=\"content-section active\">"));
}

#[test]
fn test_missing_source_warns_and_skips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("EPUB");
    let out = temp_dir.path().join("index.html");
    write_sources(&src);
    fs::remove_file(src.join("lista-partidos.xhtml")).unwrap();

    glossario(temp_dir.path())
        .args(["generate", "--source-dir"])
        .arg(&src)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Source not found"))
        .stderr(predicate::str::contains("lista-partidos.xhtml"));

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<section id=").count(), 6);
    assert!(!html.contains("<section id=\"partidos\""));
    // Menu keeps every section
    assert!(html.contains("id=\"btn-partidos\""));
}

#[test]
fn test_unreadable_source_is_named() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("EPUB");
    let out = temp_dir.path().join("index.html");
    write_sources(&src);
    fs::write(src.join("chapter1.xhtml"), b"<b\xff\xfe").unwrap();

    glossario(temp_dir.path())
        .arg("-s")
        .arg(&src)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Processing lista-siglas.xhtml..."))
        .stdout(predicate::str::contains("Processing chapter1.xhtml..."))
        .stdout(predicate::str::contains("Processing lista-comissoes.xhtml...").not())
        .stderr(predicate::str::contains("Cannot read"))
        .stderr(predicate::str::contains("chapter1.xhtml"));

    assert!(!out.exists());
}

#[test]
fn test_generate_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("EPUB");
    let out = temp_dir.path().join("index.html");
    write_sources(&src);

    let run = || {
        glossario(temp_dir.path())
            .arg("-s")
            .arg(&src)
            .arg("-o")
            .arg(&out)
            .assert()
            .success();
        fs::read(&out).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_defaults_without_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_sources(&temp_dir.path().join("epub_extracted").join("EPUB"));

    glossario(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated index.html"));

    let html = fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert_eq!(html.matches("<section id=").count(), 7);
}

#[test]
fn test_config_file_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("sources");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.xhtml"), xhtml(r#"<p id="1">A</p>"#)).unwrap();
    fs::write(
        src.join("b.xhtml"),
        xhtml(r#"<p><a href="a.xhtml#1">para A</a></p>"#),
    )
    .unwrap();

    let config = serde_json::json!({
        "source_dir": src,
        "output_path": temp_dir.path().join("site.html"),
        "sections": [
            { "file": "a.xhtml", "id": "alpha", "title": "Alpha", "primary": true },
            { "file": "b.xhtml", "id": "beta", "title": "Beta" }
        ]
    });
    let config_path = temp_dir.path().join("custom.json");
    fs::write(&config_path, config.to_string()).unwrap();

    glossario(temp_dir.path())
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success();

    let html = fs::read_to_string(temp_dir.path().join("site.html")).unwrap();
    assert_eq!(html.matches("<section id=").count(), 2);
    assert!(html.contains(r#"<p id="alpha-1">A</p>"#));
    assert!(html.contains(r##"<a href="#alpha-1">para A</a>"##));
    assert_eq!(html.matches("onclick=\"showSection(").count(), 2);
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("glossario.json"),
        r#"{ "sections": [ { "file": "a.xhtml", "id": "a", "title": "A" } ] }"#,
    )
    .unwrap();

    glossario(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No primary section configured"));
}

#[test]
fn test_check_clean_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("EPUB");
    let out = temp_dir.path().join("index.html");
    write_sources(&src);

    glossario(temp_dir.path())
        .arg("check")
        .arg("-s")
        .arg(&src)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("All 7 sections OK"));

    assert!(!out.exists());
}

#[test]
fn test_check_reports_issues() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("EPUB");
    write_sources(&src);
    fs::write(
        src.join("index.xhtml"),
        xhtml(r#"<a href="nota.xhtml#3">nota</a><p id="2"/><p id="2"/>"#),
    )
    .unwrap();

    glossario(temp_dir.path())
        .arg("check")
        .arg("-s")
        .arg(&src)
        .arg("--verbose")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unresolved link in index.xhtml: nota.xhtml#3"))
        .stderr(predicate::str::contains("Duplicate id in index.xhtml: 2"))
        .stderr(predicate::str::contains("2 issues found"))
        .stdout(predicate::str::contains("alfabetico"));
}

#[test]
fn test_init_and_config() {
    let temp_dir = tempfile::tempdir().unwrap();

    glossario(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(temp_dir.path().join("glossario.json").exists());

    glossario(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    glossario(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    glossario(temp_dir.path())
        .arg("config")
        .arg("-o")
        .arg("public/index.html")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output_path\": \"public/index.html\""))
        .stdout(predicate::str::contains("chapter1.xhtml"));
}
