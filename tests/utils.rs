// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use rocket::http::{hyper::header, ContentType, Header};

/// A Test Context structure used in integration tests to ensure setting up
/// and tearing down a Local Rocket Client thus ensuring Rocket is
/// gracefully shut down at the end of tests.
pub(crate) struct MyTestContext {
    pub client: rocket::local::blocking::Client,
}

impl test_context::TestContext for MyTestContext {
    fn setup() -> MyTestContext {
        // the proxy tests depend on the credential being absent; scrub it
        // before the config singleton materializes...
        unsafe { std::env::remove_var("GEMINI_API_KEY") };

        let __rocket = folio_rs::build(true);
        let client = rocket::local::blocking::Client::tracked(__rocket)
            .expect("Failed creating Local Rocket client");
        MyTestContext { client }
    }

    fn teardown(self) {
        self.client.terminate();
    }
}

pub(crate) fn accept_json() -> Header<'static> {
    Header::new(header::ACCEPT.as_str(), "application/json")
}

pub(crate) fn content_type(mime: &ContentType) -> Header<'static> {
    Header::new(header::CONTENT_TYPE.as_str(), mime.to_string())
}
