//! Installing the global `log` backend. Kept to one test: the backend can only
//! be set once per process.

mod common;

use common::{strip_location, SharedBuffer};
use tintlog::{bridge, new_app_logger};

#[test]
fn test_install_routes_log_macros() {
	let sink = SharedBuffer::default();
	let logger = new_app_logger(sink.clone(), "info", "default", "dep").unwrap();
	bridge::install(logger).unwrap();

	log::info!("connected to {}", "db");
	log::debug!("dropped");
	log::error!("lost connection");
	assert_eq!(
		strip_location(&sink.contents()),
		"INF dep: connected to db\nERR dep: lost connection\n"
	);

	let again = new_app_logger(SharedBuffer::default(), "info", "default", "").unwrap();
	assert!(bridge::install(again).is_err());
}
