pub mod writer;

pub use writer::write_dashboard_to_xlsx;
