/// HTTP tests for the generated-file surface: download, info, delete, list.

use std::io::Read;
use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use regex::Regex;
use serde_json::Value;

use magicslides::llm::parser::parse_presentation_response;

#[macro_use]
mod common;
use common::{ScriptedModel, sample_reply, setup_state, setup_store};

fn save_sample(store: &magicslides::storage::PresentationStore) -> String {
    let doc = parse_presentation_response(&sample_reply()).expect("sample parses");
    store.save(&doc).expect("save deck")
}

#[actix_web::test]
async fn test_saved_file_is_named_and_packaged() {
    let (dir, store) = setup_store();
    let filename = save_sample(&store);

    let re = Regex::new(r"^presentation_[0-9a-f]{32}\.pptx$").unwrap();
    assert!(re.is_match(&filename), "unexpected filename {filename}");

    let file = std::fs::File::open(dir.path().join(&filename)).expect("open deck");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip");
    let slides: Vec<String> = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .map(str::to_string)
        .collect();
    assert_eq!(slides.len(), 4);

    let mut xml = String::new();
    archive
        .by_name("ppt/slides/slide3.xml")
        .expect("third slide")
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("• Clean"));
    assert!(xml.contains("• Intermittent"));
}

#[actix_web::test]
async fn test_download_sets_attachment_headers() {
    let (_dir, store) = setup_store();
    let filename = save_sample(&store);
    let state = setup_state(Arc::new(ScriptedModel::default()), store);
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/api/ppt/download/{filename}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    );
    let disposition = headers.get("content-disposition").unwrap().to_str().unwrap();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains(&filename));

    let body = test::read_body(resp).await;
    assert_eq!(&body[..2], b"PK");
}

#[actix_web::test]
async fn test_download_missing_and_invalid_names() {
    let (_dir, store) = setup_store();
    let state = setup_state(Arc::new(ScriptedModel::default()), store);
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/ppt/download/presentation_missing.pptx")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "File not found");

    let req = test::TestRequest::get().uri("/api/ppt/download/notes.txt").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid filename");

    let req = test::TestRequest::get()
        .uri("/api/ppt/download/..%2Fsecret.pptx")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_info_reports_size_and_download_url() {
    let (dir, store) = setup_store();
    let filename = save_sample(&store);
    let size = std::fs::metadata(dir.path().join(&filename)).unwrap().len();
    let state = setup_state(Arc::new(ScriptedModel::default()), store);
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/api/ppt/info/{filename}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["filename"], filename.as_str());
    assert_eq!(body["data"]["size"], size);
    assert_eq!(body["data"]["downloadUrl"], format!("/api/ppt/download/{filename}"));
    assert!(body["data"]["created"].is_string());
    assert!(body["data"]["modified"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/ppt/info/presentation_gone.pptx")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_existing_and_missing_files_succeed() {
    let (dir, store) = setup_store();
    let filename = save_sample(&store);
    let state = setup_state(Arc::new(ScriptedModel::default()), store);
    let app = test_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/ppt/{filename}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Presentation deleted successfully");
    assert!(!dir.path().join(&filename).exists());

    // Second delete of the same name still reports success.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/ppt/{filename}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete().uri("/api/ppt/readme.md").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_only_includes_decks() {
    let (dir, store) = setup_store();
    let first = save_sample(&store);
    let second = save_sample(&store);
    std::fs::write(dir.path().join("stray.txt"), "x").unwrap();
    let state = setup_state(Arc::new(ScriptedModel::default()), store);
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/ppt/list").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    let items = body["data"]["presentations"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    let names: Vec<&str> = items.iter().map(|i| i["filename"].as_str().unwrap()).collect();
    assert!(names.contains(&first.as_str()));
    assert!(names.contains(&second.as_str()));
    for item in items {
        assert!(item.get("modified").is_none());
        assert!(item["downloadUrl"].as_str().unwrap().starts_with("/api/ppt/download/"));
    }
}
