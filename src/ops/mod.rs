pub mod filter_ops;
pub mod task_ops;
