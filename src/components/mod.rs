//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod home;
pub mod layout;
pub mod login;
pub mod notice_dialog;
pub mod quit_dialog;
pub mod shake;

pub use home::HomeComponent;
pub use layout::centered_popup;
pub use login::LoginComponent;
pub use notice_dialog::NoticeDialog;
pub use quit_dialog::QuitDialog;
pub use shake::Shake;
