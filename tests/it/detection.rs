use super::*;
use compreface_client::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn detect_with_plugins() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/detection/detect")
            .match_header("x-api-key", API_KEY)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "1".into()),
                Matcher::UrlEncoded("status".into(), "false".into()),
                Matcher::UrlEncoded("det_prob_threshold".into(), "0.5".into()),
                Matcher::UrlEncoded("face_plugins".into(), "age,gender,pose".into()),
            ]))
            .match_body(Matcher::Json(json!({ "file": "aGVsbG8=" }))),
        200,
        json!({
            "result": [{
                "age": { "probability": 0.8, "high": 32, "low": 25 },
                "gender": { "probability": 0.99, "value": "female" },
                "pose": { "pitch": 1.5, "roll": -2.0, "yaw": 10.25 },
                "box": { "probability": 0.99, "x_max": 100, "y_max": 120, "x_min": 20, "y_min": 10 }
            }]
        }),
    )
    .create_async()
    .await;

    let service = FaceDetectionService::new(server.url(), API_KEY);
    let res = service
        .detect(
            ImageInput::base64(b"hello"),
            DetectOptions::new()
                .with_limit(1)
                .with_det_prob_threshold(0.5)
                .with_face_plugins([FacePlugin::Age, FacePlugin::Gender, FacePlugin::Pose]),
        )
        .await
        .unwrap();

    let face = &res.result[0];
    assert_eq!(face.bounding_box.x_max, 100);
    assert_eq!(face.gender.as_ref().unwrap().value, Gender::Female);
    assert_eq!(face.age.as_ref().unwrap().high, 32);
    m.assert_async().await;
}

#[tokio::test]
async fn detect_binary_image_as_multipart() {
    let mut server = mockito::Server::new_async().await;
    let m = json_response(
        server
            .mock("POST", "/api/v1/detection/detect")
            .match_query(Matcher::Any)
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::Regex(r#"name="file"; filename="crowd.jpg""#.into())),
        200,
        json!({ "result": [] }),
    )
    .create_async()
    .await;

    let service = FaceDetectionService::new(server.url(), API_KEY);
    let res = service
        .detect(
            ImageInput::binary(&b"fake-jpeg-bytes"[..], "crowd.jpg"),
            DetectOptions::new(),
        )
        .await
        .unwrap();
    assert!(res.result.is_empty());
    m.assert_async().await;
}
