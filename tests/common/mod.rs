#![allow(dead_code)]

pub use clihelper_test_utils::{builders, fakes, init_tracing, with_timeout};
