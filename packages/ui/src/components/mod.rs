//! Small presentational building blocks shared across views.

mod avatar;
mod button;
mod dialog;
mod input;
mod label;
mod textarea;

pub use avatar::{Avatar, AvatarSize};
pub use button::{Button, ButtonVariant};
pub use dialog::Dialog;
pub use input::Input;
pub use label::Label;
pub use textarea::Textarea;
