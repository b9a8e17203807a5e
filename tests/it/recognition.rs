use super::*;
use compreface_client::*;
use mockito::Matcher;
use serde_json::json;

fn service(server: &mockito::ServerGuard) -> FaceRecognitionService {
    FaceRecognitionService::new(format!("{}/", server.url()), API_KEY)
}

#[tokio::test]
async fn add_subject_returns_subject() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/recognition/subjects")
            .match_header("x-api-key", API_KEY)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "subject": "Test1" }))),
        201,
        json!({ "subject": "Test1" }),
    )
    .create_async()
    .await;

    let res = service(&server).add_subject("Test1").await.unwrap();
    assert_eq!(res.subject, "Test1");
    m.assert_async().await;
}

#[tokio::test]
async fn rename_subject_puts_new_name() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("PUT", "/api/v1/recognition/subjects/Test1")
            .match_body(Matcher::Json(json!({ "subject": "Test0" }))),
        200,
        json!({ "updated": true }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .rename_subject("Test1", "Test0")
        .await
        .unwrap();
    assert!(res.updated);
    m.assert_async().await;
}

#[tokio::test]
async fn subject_names_are_percent_encoded() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server.mock("DELETE", "/api/v1/recognition/subjects/Ada%20Lovelace"),
        200,
        json!({ "subject": "Ada Lovelace" }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .delete_subject(" Ada Lovelace ")
        .await
        .unwrap();
    assert_eq!(res.subject, "Ada Lovelace");
    m.assert_async().await;
}

#[tokio::test]
async fn list_and_delete_all_subjects() {
    let mut server = mockito::Server::new_async().await;
    let list = json_response(
        server.mock("GET", "/api/v1/recognition/subjects/"),
        200,
        json!({ "subjects": ["Test1", "Test2", "Test3"] }),
    )
    .create_async()
    .await;
    let delete = json_response(
        server.mock("DELETE", "/api/v1/recognition/subjects"),
        200,
        json!({ "deleted": 3 }),
    )
    .create_async()
    .await;

    let service = service(&server);
    let subjects = service.list_subjects().await.unwrap();
    assert_eq!(subjects.subjects, ["Test1", "Test2", "Test3"]);
    assert_eq!(service.delete_all_subjects().await.unwrap().deleted, 3);
    list.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn add_example_with_base64_sends_json() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/recognition/faces")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("subject".into(), "Base64Boy".into()),
                Matcher::UrlEncoded("det_prob_threshold".into(), "0.8".into()),
            ]))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "file": "aGVsbG8=" }))),
        201,
        json!({ "image_id": "6b135f5b-a365-4522-b1f1-4c9ac2dd0728", "subject": "Base64Boy" }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .add_example(
            "Base64Boy",
            ImageInput::base64(b"hello"),
            AddExampleOptions::new().with_det_prob_threshold(0.8),
        )
        .await
        .unwrap();
    assert_eq!(res.subject, "Base64Boy");
    assert_eq!(res.image_id, "6b135f5b-a365-4522-b1f1-4c9ac2dd0728");
    m.assert_async().await;
}

#[tokio::test]
async fn add_example_with_bytes_sends_multipart() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/recognition/faces")
            .match_query(Matcher::UrlEncoded("subject".into(), "BlobBoy".into()))
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="ai_boy.jpg""#.into()),
                Matcher::Regex("fake-jpeg-bytes".into()),
            ])),
        201,
        json!({ "image_id": "c1", "subject": "BlobBoy" }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .add_example(
            "BlobBoy",
            ImageInput::binary(&b"fake-jpeg-bytes"[..], "ai_boy.jpg"),
            AddExampleOptions::new(),
        )
        .await
        .unwrap();
    assert_eq!(res.subject, "BlobBoy");
    m.assert_async().await;
}

#[tokio::test]
async fn list_examples_of_unknown_subject_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("GET", "/api/v1/recognition/faces")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "0".into()),
                Matcher::UrlEncoded("size".into(), "20".into()),
                Matcher::UrlEncoded("subject".into(), "Nobody".into()),
            ])),
        200,
        json!({
            "faces": [],
            "page_number": 0,
            "page_size": 20,
            "total_pages": 0,
            "total_elements": 0
        }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .list_examples(ListExamplesOptions::new().with_subject("Nobody"))
        .await
        .unwrap();
    assert!(res.faces.is_empty());
    assert_eq!(res.page_size, 20);
    m.assert_async().await;
}

#[tokio::test]
async fn delete_examples_by_subject_id_and_batch() {
    let mut server = mockito::Server::new_async().await;
    let by_subject = json_response(
        server
            .mock("DELETE", "/api/v1/recognition/faces")
            .match_query(Matcher::UrlEncoded("subject".into(), "BlobBoy".into())),
        200,
        json!({ "deleted": 1 }),
    )
    .create_async()
    .await;
    let by_id = json_response(
        server.mock("DELETE", "/api/v1/recognition/faces/img-1"),
        200,
        json!({ "image_id": "img-1", "subject": "Base64Boy" }),
    )
    .create_async()
    .await;
    let batch = json_response(
        server
            .mock("POST", "/api/v1/recognition/faces/delete")
            .match_body(Matcher::Json(json!(["img-2", "img-3"]))),
        200,
        json!([
            { "image_id": "img-2", "subject": "Base64Boy" },
            { "image_id": "img-3", "subject": "Base64Boy" }
        ]),
    )
    .create_async()
    .await;

    let service = service(&server);
    assert_eq!(
        service
            .delete_examples_of_subject("BlobBoy")
            .await
            .unwrap()
            .deleted,
        1
    );
    assert_eq!(
        service.delete_example("img-1").await.unwrap().image_id,
        "img-1"
    );
    let deleted = service.delete_examples(&["img-2", "img-3"]).await.unwrap();
    assert_eq!(deleted.len(), 2);

    by_subject.assert_async().await;
    by_id.assert_async().await;
    batch.assert_async().await;
}

#[tokio::test]
async fn download_example_image_returns_raw_bytes() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/api/v1/recognition/faces/img-1/img")
        .match_header("x-api-key", API_KEY)
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body([0xffu8, 0xd8, 0xff, 0xe0])
        .create_async()
        .await;

    let bytes = service(&server)
        .download_example_image("img-1")
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), &[0xffu8, 0xd8, 0xff, 0xe0]);
    m.assert_async().await;
}

#[tokio::test]
async fn recognize_sends_defaults_and_plugins() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/recognition/recognize")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "0".into()),
                Matcher::UrlEncoded("prediction_count".into(), "1".into()),
                Matcher::UrlEncoded("status".into(), "true".into()),
                Matcher::UrlEncoded("detect_faces".into(), "true".into()),
                Matcher::UrlEncoded("face_plugins".into(), "age,calculator".into()),
            ])),
        200,
        json!({
            "result": [{
                "age": { "probability": 0.9, "high": 30, "low": 25 },
                "box": { "probability": 1.0, "x_max": 10, "y_max": 10, "x_min": 0, "y_min": 0 },
                "embedding": [0.1, 0.2],
                "subjects": [{ "subject": "Female1", "similarity": 0.42 }]
            }],
            "plugins_versions": { "age": "agegender.AgeDetector", "calculator": "facenet.Calculator" }
        }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .recognize(
            ImageInput::text("aGVsbG8="),
            RecognizeOptions::new()
                .with_status(true)
                .with_face_plugins([FacePlugin::Age, FacePlugin::Calculator]),
        )
        .await
        .unwrap();
    let face = &res.result[0];
    assert_eq!(face.subjects[0].subject, "Female1");
    assert_eq!(face.face.embedding.as_ref().unwrap().len(), 2);
    assert!(res.plugins_versions.is_some());
    m.assert_async().await;
}

#[tokio::test]
async fn recognize_and_verify_by_embedding() {
    let mut server = mockito::Server::new_async().await;
    let recognize = json_response(
        server
            .mock("POST", "/api/v1/recognition/embeddings/recognize")
            .match_query(Matcher::UrlEncoded("prediction_count".into(), "1".into()))
            .match_body(Matcher::Json(json!({ "embeddings": [[0.5, 0.25]] }))),
        200,
        json!({ "result": [{ "embedding": [0.5, 0.25], "similarities": [{ "subject": "Ada", "similarity": 0.99 }] }] }),
    )
    .create_async()
    .await;
    let verify = json_response(
        server
            .mock("POST", "/api/v1/recognition/embeddings/faces/img-1/verify")
            .match_body(Matcher::Json(json!({ "embeddings": [[0.5, 0.25]] }))),
        200,
        json!({ "result": [{ "embedding": [0.5, 0.25], "similarity": 0.99 }] }),
    )
    .create_async()
    .await;

    let service = service(&server);
    let res = service
        .recognize_by_embedding(RecognizeByEmbeddingOptions::new(vec![vec![0.5, 0.25]]))
        .await
        .unwrap();
    assert_eq!(res.result[0].similarities[0].subject, "Ada");

    let res = service
        .verify_by_embedding("img-1", VerifyByEmbeddingOptions::new(vec![vec![0.5, 0.25]]))
        .await
        .unwrap();
    assert_eq!(res.result[0].similarity, 0.99);

    recognize.assert_async().await;
    verify.assert_async().await;
}

#[tokio::test]
async fn verify_against_saved_example() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/recognition/faces/img-1/verify")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "0".into()),
                Matcher::UrlEncoded("status".into(), "false".into()),
                Matcher::UrlEncoded("face_plugins".into(), "calculator".into()),
            ])),
        200,
        json!({
            "result": [{
                "box": { "probability": 1.0, "x_max": 10, "y_max": 10, "x_min": 0, "y_min": 0 },
                "similarity": 0.12,
                "embedding": [0.3]
            }]
        }),
    )
    .create_async()
    .await;

    let res = service(&server)
        .verify(
            "img-1",
            ImageInput::text("aGVsbG8="),
            VerifyOptions::new().with_face_plugins([FacePlugin::Calculator]),
        )
        .await
        .unwrap();
    assert_eq!(res.result[0].similarity, 0.12);
    assert!(res.plugins_versions.is_none());
    m.assert_async().await;
}

#[tokio::test]
async fn update_config_redirects_new_calls() {
    let mut first = mockito::Server::new_async().await;
    let mut second = mockito::Server::new_async().await;
    let old = first
        .mock("GET", "/api/v1/recognition/subjects/")
        .expect(0)
        .create_async()
        .await;
    let new = json_response(
        second
            .mock("GET", "/api/v1/recognition/subjects/")
            .match_header("x-api-key", "rotated-key"),
        200,
        json!({ "subjects": [] }),
    )
    .create_async()
    .await;

    let mut service = service(&first);
    service.update_config(format!("{}/", second.url()), "rotated-key");
    assert_eq!(service.api_key(), "rotated-key");
    assert!(service.list_subjects().await.unwrap().subjects.is_empty());

    old.assert_async().await;
    new.assert_async().await;
}

#[tokio::test]
async fn default_headers_ride_along_with_every_call() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("GET", "/api/v1/recognition/subjects/")
            .match_header("x-request-source", "kiosk-7")
            .match_header("x-api-key", API_KEY),
        200,
        json!({ "subjects": ["Test1"] }),
    )
    .create_async()
    .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-request-source", "kiosk-7".parse().unwrap());
    headers.insert("x-api-key", "not-the-key".parse().unwrap());
    let service = service(&server).with_headers(headers);

    let res = service.list_subjects().await.unwrap();
    assert_eq!(res.subjects, ["Test1"]);
    m.assert_async().await;
}
