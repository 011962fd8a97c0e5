use calculatepi_cgi::{handle_request, Status};

fn render(body: &str) -> (Status, String) {
    let response = handle_request(body);
    let mut out = Vec::new();
    response.write_to(&mut out).unwrap();
    (response.status, String::from_utf8(out).unwrap())
}

fn json_body(text: &str) -> serde_json::Value {
    let (_, body) = text.split_once("\n\n").expect("header separator");
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_round_trip() {
    let (status, text) = render(r#"{"niter": 1000}"#);
    assert_eq!(status, Status::Ok);
    assert!(text.starts_with("Content-type: application/json\n\n"));
    assert!(text.contains(r#""niter": 1000"#), "body: {}", text);

    let body = json_body(&text);
    let pi = body["pi"].as_f64().unwrap();
    assert!((0.0..=4.0).contains(&pi));
    assert_eq!(pi, 3.22);
}

#[test]
fn test_niter_echoed_verbatim() {
    let (_, text) = render(r#"{"niter": 2e3}"#);
    assert_eq!(json_body(&text)["niter"], serde_json::json!(2000.0));
}

#[test]
fn test_client_errors() {
    for body in ["", "{", "{}", r#"{"niter": null}"#, r#"{"niter": -1}"#, r#"{"niter": 0}"#] {
        let (status, text) = render(body);
        assert_eq!(status, Status::BadRequest, "body {:?}", body);
        assert!(text.starts_with("Status: 400 Bad Request\n"));
        assert!(json_body(&text)["error"].is_string());
    }
}
