// SPDX-License-Identifier: GPL-3.0-or-later

mod utils;

use folio_rs::{
    FolioError, ProjectCount, ProjectView, MOCK_IMAGE_URL, MOCK_PROJECT_BROKEN_MEDIA,
    MOCK_PROJECT_DANGLING_IMAGE, MOCK_PROJECT_NO_IMAGE, MOCK_PROJECT_WITH_IMAGE,
};
use rocket::http::{ContentType, Status};
use serde_json::Value;
use test_context::test_context;
use tracing_test::traced_test;
use utils::{accept_json, MyTestContext};

#[test_context(MyTestContext)]
#[traced_test]
#[test]
fn test_get_with_image(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    let req = client
        .get(format!("/projects/{}", MOCK_PROJECT_WITH_IMAGE))
        .header(accept_json());
    let resp = req.dispatch();

    assert_eq!(resp.status(), Status::Ok);
    assert_eq!(resp.content_type(), Some(ContentType::JSON));
    let view = resp.into_json::<ProjectView>().unwrap();
    let project = view.project().expect("Missing project");
    assert_eq!(project.id(), MOCK_PROJECT_WITH_IMAGE);
    assert_eq!(project.title(), "Chess Engine");
    assert_eq!(view.image_url().expect("Missing image URL").as_str(), MOCK_IMAGE_URL);

    Ok(())
}

#[test_context(MyTestContext)]
#[test]
fn test_get_without_image(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    let resp = client
        .get(format!("/projects/{}", MOCK_PROJECT_NO_IMAGE))
        .header(accept_json())
        .dispatch();

    assert_eq!(resp.status(), Status::Ok);
    let view = resp.into_json::<ProjectView>().unwrap();
    assert!(view.project().is_some());
    assert!(view.image_url().is_none());

    Ok(())
}

/// An unknown id is not an error; the page gets `(null, null)` and renders
/// its not-found state.
#[test_context(MyTestContext)]
#[test]
fn test_get_unknown_id(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    let resp = client.get("/projects/99999").header(accept_json()).dispatch();

    assert_eq!(resp.status(), Status::Ok);
    // both members must be present + explicitly null...
    let json = resp.into_json::<Value>().unwrap();
    assert!(json.get("project").unwrap().is_null());
    assert!(json.get("image_url").unwrap().is_null());

    Ok(())
}

/// A failing image lookup must not take the project down w/ it.
#[test_context(MyTestContext)]
#[test]
fn test_get_tolerates_image_failures(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    for id in [MOCK_PROJECT_DANGLING_IMAGE, MOCK_PROJECT_BROKEN_MEDIA] {
        let resp = client
            .get(format!("/projects/{}", id))
            .header(accept_json())
            .dispatch();

        assert_eq!(resp.status(), Status::Ok);
        let view = resp.into_json::<ProjectView>().unwrap();
        assert!(view.project().is_some());
        assert!(view.image_url().is_none());
    }

    Ok(())
}

#[test_context(MyTestContext)]
#[test]
fn test_count(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    let resp = client.get("/projects/count").header(accept_json()).dispatch();

    assert_eq!(resp.status(), Status::Ok);
    assert_eq!(resp.content_type(), Some(ContentType::JSON));
    let count = resp.into_json::<ProjectCount>().unwrap();
    assert_eq!(count.count(), 4);

    Ok(())
}

#[test_context(MyTestContext)]
#[test]
fn test_responses_carry_cors_and_timing_headers(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    let resp = client.get("/projects/count").dispatch();

    assert_eq!(
        resp.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    let timing = resp
        .headers()
        .get_one("X-Response-Time")
        .expect("Missing X-Response-Time header");
    assert!(timing.ends_with(" ms"));

    Ok(())
}

#[test_context(MyTestContext)]
#[test]
fn test_unknown_route_is_json_404(ctx: &mut MyTestContext) -> Result<(), FolioError> {
    let client = &ctx.client;

    let resp = client.get("/nope").header(accept_json()).dispatch();

    assert_eq!(resp.status(), Status::NotFound);
    let json = resp.into_json::<Value>().unwrap();
    assert_eq!(json["error"], "Resource not found");

    Ok(())
}
