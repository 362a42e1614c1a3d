use httpmock::Method::GET;

use crate::common::{PNG_1X1, client_for, setup_server};

#[test]
fn to_binary_returns_the_raw_body() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/chart")
            .query_param("cht", "p")
            .query_param("chd", "t:1,2,3")
            .query_param("chs", "2x2");
        then.status(200)
            .header("content-type", "image/png")
            .body(PNG_1X1);
    });

    let bytes = client_for(&server)
        .chart()
        .cht("p")
        .chd("t:1,2,3")
        .chs("2x2")
        .to_binary()
        .unwrap();

    mock.assert();
    assert_eq!(bytes, PNG_1X1);
}

#[test]
fn fetch_exposes_headers_of_that_call_only() {
    let server = setup_server();
    let first = server.mock(|when, then| {
        when.method(GET).path("/chart").query_param("chs", "1x1");
        then.status(200)
            .header("content-type", "image/png")
            .header("X-Render-Id", "first")
            .body(PNG_1X1);
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/chart").query_param("chs", "2x2");
        then.status(200)
            .header("content-type", "image/gif")
            .body(PNG_1X1);
    });

    let chart = client_for(&server).chart().cht("p");
    let a = chart.chs("1x1").fetch().unwrap();
    let b = chart.chs("2x2").fetch().unwrap();

    first.assert();
    second.assert();

    assert_eq!(a.status(), 200);
    assert_eq!(a.content_type(), Some("image/png"));
    assert_eq!(a.headers().get("x-render-id"), Some("first"));
    assert_eq!(a.headers().get("X-RENDER-ID"), Some("first"));
    assert_eq!(
        a.headers().get_all("x-render-id").map(<[String]>::len),
        Some(1)
    );

    let names: Vec<&str> = a.headers().iter().map(|(name, _)| name).collect();
    assert!(names.contains(&"x-render-id"), "{names:?}");
    assert!(names.iter().all(|n| *n == n.to_ascii_lowercase()), "{names:?}");
    assert_eq!(a.headers().len(), names.len());
    assert!(!a.headers().is_empty());

    assert_eq!(b.content_type(), Some("image/gif"));
    assert_eq!(b.headers().get("x-render-id"), None);
}

#[test]
fn redirects_are_followed() {
    let server = setup_server();
    let redirect = server.mock(|when, then| {
        when.method(GET).path("/chart");
        then.status(302).header("location", server.url("/rendered/chart.png"));
    });
    let target = server.mock(|when, then| {
        when.method(GET).path("/rendered/chart.png");
        then.status(200).body(PNG_1X1);
    });

    let bytes = client_for(&server)
        .chart()
        .cht("p")
        .chs("2x2")
        .to_binary()
        .unwrap();

    redirect.assert();
    target.assert();
    assert_eq!(bytes, PNG_1X1);
}

#[test]
fn signed_request_reaches_the_server() {
    let server = setup_server();
    let client = crate::common::builder_for(&server)
        .secret("plop")
        .build()
        .unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/chart")
            .query_param("icac", "test_fixture")
            .query_param(
                "ichm",
                "71bd93758b49ed28fdabd23a0ff366fe7bf877296ea888b9aaf4ede7978bdc8d",
            );
        then.status(200).body(PNG_1X1);
    });

    client
        .chart()
        .cht("p")
        .chd("t:1,2,3")
        .chs("100x100")
        .icac("test_fixture")
        .to_binary()
        .unwrap();

    mock.assert();
}
