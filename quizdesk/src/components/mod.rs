pub mod dashboard;
pub mod help_bar;
pub mod result_display;
pub mod trigger_button;

// Re-export core Component trait
pub use quizdesk_core::Component;

pub use dashboard::{Dashboard, DashboardProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use result_display::{ResultDisplay, ResultDisplayProps};
pub use trigger_button::{TriggerButton, TriggerButtonProps, SPINNERS};
