//! This module contains property based tests.
