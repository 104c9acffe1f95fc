//! End-to-end checks for the scanner and baseline flow against loopback
//! listeners. Everything here is test-only.

#![cfg(test)]

mod baseline;
mod log;
mod scan;
mod util;
