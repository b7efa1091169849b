pub mod snapshot_model;
