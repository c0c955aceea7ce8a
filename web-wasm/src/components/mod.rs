pub mod header;
pub mod progress_bar;
pub mod quick_stats;
pub mod summary_dialog;
pub mod toaster;
pub mod video_monitor;
pub mod video_upload;
