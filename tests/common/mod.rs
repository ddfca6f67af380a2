// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use request_input::{InputConfig, RequestInput};

/// Install a test subscriber so `debug!`/`warn!` output is visible with
/// `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Build a request from raw encoded strings under default configuration.
pub fn make_request(query_string: &str, form_body: &str) -> RequestInput {
    init_tracing();
    RequestInput::from_encoded(&InputConfig::default(), query_string, form_body)
}
