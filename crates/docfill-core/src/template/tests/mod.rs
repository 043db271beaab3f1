//! Tests for the template module

use super::*;

mod helpers;

mod extract;
