//! This module contains feature tests: command line scenarios run from argument parsing to output files.
