//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use regex::Regex;

/// In-memory sink that stays readable while a logger holds a clone of it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
	pub fn contents(&self) -> String {
		String::from_utf8(self.0.lock().clone()).unwrap()
	}

	pub fn clear(&self) {
		self.0.lock().clear();
	}
}

impl Write for SharedBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Replaces `tests/<file>.rs:<line>` inside caller tokens, leaving `<>`.
pub fn strip_location(output: &str) -> String {
	let re = Regex::new(r"tests/[A-Za-z0-9_]+\.rs:\d+").unwrap();
	re.replace_all(output, "").into_owned()
}
