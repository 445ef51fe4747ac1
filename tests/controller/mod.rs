//! Integration tests for the HTTP controllers, called directly with extracted arguments
//! against the mock backend.

mod auth;

use arc_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
